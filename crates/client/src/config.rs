use shared_types::{AppConfig, FeatureFlags, DEFAULT_API_BASE_URL};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_ENV: &str = "OEQ_API_BASE_URL";

/// Connection settings for [`crate::Client`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

impl ClientConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            timeout_secs: config.api.timeout_secs,
        }
    }

    /// Settings from `config.toml`, with `OEQ_API_BASE_URL` taking priority.
    pub fn load() -> Self {
        let mut config = Self::from_app_config(app_config());
        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        tracing::debug!(base_url = %config.base_url, "Client configuration loaded");
        config
    }
}

/// Parse a config file's contents, falling back to defaults on error.
pub fn parse_app_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Read `.env` and `config.toml` once; later calls return the cached result.
///
/// A missing file gives the defaults ([`DEFAULT_API_BASE_URL`], every
/// feature on).
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => {
                let config = parse_app_config(&contents);
                tracing::info!(features = ?config.features, "Loaded {CONFIG_PATH}");
                config
            }
            Err(e) => {
                tracing::info!(
                    error = %e,
                    "{CONFIG_PATH} not found, using {DEFAULT_API_BASE_URL}"
                );
                AppConfig::default()
            }
        }
    })
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let config = parse_app_config("[api\nbase_url = ");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn client_config_takes_api_table() {
        let config = parse_app_config(
            r#"
            [api]
            base_url = "https://repo.example.edu/api"
            "#,
        );
        let client_config = ClientConfig::from_app_config(&config);
        assert_eq!(client_config.base_url, "https://repo.example.edu/api");
        assert_eq!(client_config.timeout_secs, 30);
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_API_BASE_URL);
    }
}
