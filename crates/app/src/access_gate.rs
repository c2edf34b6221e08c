use crate::auth::{redirect_to_login, redirect_to_pricing, use_session};
use dioxus::prelude::*;
use shared_types::{LockReason, TileAccess};
use shared_ui::{Button, ButtonVariant, LockedOverlay};

/// Paywall decision for premium tile content, for the current user.
pub fn use_tile_access() -> TileAccess {
    use_session().tile_access()
}

/// Render `children` in full, or blurred under a lock card whose call to
/// action matches why the content is locked.
#[component]
pub fn PremiumGate(
    access: TileAccess,
    title: String,
    description: String,
    /// Path to come back to after logging in.
    return_to: String,
    children: Element,
) -> Element {
    let actions = match access {
        TileAccess::Full => rsx! {},
        TileAccess::Locked(reason @ LockReason::SignedOut) => rsx! {
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| redirect_to_login(&return_to),
                "{reason.cta_label()}"
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| redirect_to_pricing(),
                "{LockReason::NoSubscription.cta_label()}"
            }
        },
        TileAccess::Locked(reason @ LockReason::NoSubscription) => rsx! {
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| redirect_to_pricing(),
                "{reason.cta_label()}"
            }
        },
    };

    rsx! {
        LockedOverlay {
            locked: access.is_locked(),
            title,
            description,
            actions,
            {children}
        }
    }
}
