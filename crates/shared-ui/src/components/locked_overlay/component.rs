use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;

/// Blurs `children` and overlays a lock card when `locked` is set.
///
/// The gated content is still rendered underneath so the layout does not
/// jump when access changes; `actions` holds the call-to-action buttons.
#[component]
pub fn LockedOverlay(
    locked: bool,
    title: String,
    description: String,
    actions: Element,
    children: Element,
) -> Element {
    if !locked {
        return rsx! { {children} };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "locked-region",
            div { class: "locked-content", "aria-hidden": "true", {children} }
            div { class: "locked-card", role: "region", "aria-label": "{title}",
                div { class: "locked-icon", Icon::<LdLock> { icon: LdLock, width: 24, height: 24 } }
                h3 { class: "locked-title", "{title}" }
                p { class: "locked-description", "{description}" }
                div { class: "locked-actions", {actions} }
            }
        }
    }
}
