pub mod account;
pub mod admin_tiles;
pub mod cancel_subscription;
pub mod home;
pub mod not_found;
pub mod tile_detail;

use crate::auth::{redirect_to_login, use_auth};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutGrid, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;
use shared_ui::{Avatar, AvatarFallback, AvatarImage, Button, ButtonVariant};

use account::Account;
use admin_tiles::AdminTiles;
use cancel_subscription::CancelSubscription;
use home::Home;
use not_found::NotFound;
use tile_detail::TileDetail;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/shariah/:slug")]
    TileDetail { slug: String },
    #[layout(AuthGuard)]
    #[route("/account")]
    Account {},
    #[route("/account/cancel")]
    CancelSubscription {},
    #[end_layout]
    #[layout(AdminGuard)]
    #[route("/admin/shariah-tiles")]
    AdminTiles {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn PageLoading(message: String) -> Element {
    rsx! {
        div { class: "page-loading",
            p { "{message}" }
        }
    }
}

/// Auth guard layout: sends signed-out visitors to the host login page and
/// brings them back to the page they asked for.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if !(auth.loaded)() {
        return rsx! { PageLoading { message: "Loading..." } };
    }
    if !auth.is_authenticated() {
        redirect_to_login(&route.to_string());
        return rsx! { PageLoading { message: "Redirecting to login..." } };
    }

    rsx! { Outlet::<Route> {} }
}

/// Admin guard layout: admin role and the `admin_console` flag are both
/// required.
#[component]
fn AdminGuard() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let route: Route = use_route();

    if !flags.admin_console {
        return rsx! { NotFound { route: vec!["admin".to_string(), "shariah-tiles".to_string()] } };
    }
    if !(auth.loaded)() {
        return rsx! { PageLoading { message: "Loading..." } };
    }
    if !auth.is_authenticated() {
        redirect_to_login(&route.to_string());
        return rsx! { PageLoading { message: "Redirecting to login..." } };
    }
    if !auth.session().is_admin() {
        return rsx! {
            div { class: "access-denied",
                h1 { "Admins only" }
                p { "You do not have access to the tile console." }
                Link { to: Route::Home {}, "Back to research" }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Top bar with brand, navigation and the account menu.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let session = auth.session();

    let on_home = matches!(route, Route::Home {} | Route::TileDetail { .. });
    let on_account = matches!(route, Route::Account {} | Route::CancelSubscription {});
    let on_admin = matches!(route, Route::AdminTiles {});
    let return_to = route.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "app-header",
            Link { to: Route::Home {}, class: "app-brand", "Shariah Research" }

            nav { class: "app-nav",
                Link {
                    to: Route::Home {},
                    class: if on_home { "app-nav-link active" } else { "app-nav-link" },
                    Icon::<LdLayoutGrid> { icon: LdLayoutGrid, width: 16, height: 16 }
                    "Research"
                }
                if session.is_admin() && flags.admin_console {
                    Link {
                        to: Route::AdminTiles {},
                        class: if on_admin { "app-nav-link active" } else { "app-nav-link" },
                        Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                        "Tiles"
                    }
                }
            }

            div { class: "app-account",
                if let Some(user) = session.user.clone() {
                    Link {
                        to: Route::Account {},
                        class: if on_account { "app-account-link active" } else { "app-account-link" },
                        Avatar {
                            if let Some(url) = user.profile_picture.clone() {
                                AvatarImage { src: url }
                            }
                            AvatarFallback { "{user.initials()}" }
                        }
                        span { class: "app-account-name", "{user.name}" }
                    }
                } else if (auth.loaded)() {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| redirect_to_login(&return_to),
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                        "Log in"
                    }
                }
            }
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
