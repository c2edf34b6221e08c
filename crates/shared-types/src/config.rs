use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Feature flags controlling optional parts of the UI.
///
/// Every field defaults to `true` when the `[features]` table is present but
/// incomplete; a missing config file yields `FeatureFlags::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub admin_console: bool,
    #[serde(default = "default_true")]
    pub avatar_upload: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            admin_console: true,
            avatar_upload: true,
        }
    }
}

/// Where the REST backend lives, plus host-site pages this app links out to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_pricing_path")]
    pub pricing_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            pricing_path: default_pricing_path(),
        }
    }
}

impl ApiConfig {
    /// Join an endpoint path onto the base URL without doubling slashes.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Login URL that returns the user to `return_to` afterwards.
    pub fn login_url(&self, return_to: &str) -> String {
        format!(
            "{}?redirect={}",
            self.login_path,
            urlencoding::encode(return_to)
        )
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_pricing_path() -> String {
    "/pricing".to_string()
}
