use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod access_gate;
mod auth;
mod components;
mod routes;
use auth::{use_auth, AuthState};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    if let Err(e) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    // Resolve the API base URL and feature flags before the first render so
    // every page sees the same values.
    api_client::config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let flags: FeatureFlags = api_client::config::app_config().features.clone();
    use_context_provider(|| flags);

    use_context_provider(AuthState::new);

    // Resolve the session user once on startup; guards wait on `loaded`.
    let mut auth = use_auth();
    use_hook(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
