use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Copy of the workspace `config.toml` baked in at build time. Browser
/// builds have no filesystem, and native builds fall back to it when the
/// file is missing.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Environment variable overriding `[api] base_url`.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Parse a config document, falling back to defaults on error.
pub fn parse_config(source: &str, contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(source, error = %e, "Failed to parse config; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    dotenvy::dotenv().ok();

    let mut config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(CONFIG_PATH, &contents),
        Err(e) => {
            tracing::debug!(path = CONFIG_PATH, error = %e, "Config file not found; using embedded copy");
            parse_config("embedded", EMBEDDED_CONFIG)
        }
    };
    if let Ok(base_url) = std::env::var(API_BASE_URL_VAR) {
        if !base_url.trim().is_empty() {
            config.api.base_url = base_url;
        }
    }
    config
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    let mut config = parse_config("embedded", EMBEDDED_CONFIG);
    if let Some(base_url) = option_env!("API_BASE_URL") {
        if !base_url.trim().is_empty() {
            config.api.base_url = base_url.to_string();
        }
    }
    config
}

/// Load the app configuration into the global `OnceLock`. Safe to call
/// multiple times; only the first call reads anything.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(
            base_url = %config.api.base_url,
            features = ?config.features,
            "Loaded app configuration"
        );
        config
    })
}

/// The loaded configuration, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config: AppConfig = toml::from_str(EMBEDDED_CONFIG).unwrap();
        assert!(!config.api.base_url.is_empty());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        assert_eq!(parse_config("test", "[api\nbase_url ="), AppConfig::default());
    }
}
