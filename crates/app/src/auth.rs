use dioxus::prelude::*;
use shared_types::{AuthUser, Session};

/// Global authentication state.
///
/// Holds only the signed-in user; pages derive a [`Session`] snapshot from
/// it and pass that down as a prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
    /// Set once the first `/api/auth/me` round trip finished.
    pub loaded: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            loaded: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    pub fn session(&self) -> Session {
        match self.current_user.read().as_ref() {
            Some(user) => Session::for_user(user.clone()),
            None => Session::anonymous(),
        }
    }

    /// Re-read the session user from the backend.
    ///
    /// A failed request leaves the current user untouched; only an explicit
    /// "not signed in" answer clears it.
    pub async fn refresh(&mut self) {
        match api_client::api::get_current_user().await {
            Ok(Some(user)) => self.set_user(user),
            Ok(None) => self.clear_auth(),
            Err(e) => tracing::warn!(error = %e, "Failed to refresh session user"),
        }
        self.loaded.set(true);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook returning the current session snapshot. Re-renders on login/logout.
pub fn use_session() -> Session {
    use_auth().session()
}

/// Send the browser to the host site's login page, returning to `return_to`.
pub fn redirect_to_login(return_to: &str) {
    let config = api_client::config::app_config();
    navigator().push(NavigationTarget::<crate::routes::Route>::External(
        config.api.login_url(return_to),
    ));
}

/// Send the browser to the host site's pricing page.
pub fn redirect_to_pricing() {
    let config = api_client::config::app_config();
    navigator().push(NavigationTarget::<crate::routes::Route>::External(
        config.api.pricing_path.clone(),
    ));
}
