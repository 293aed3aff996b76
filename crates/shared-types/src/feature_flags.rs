use serde::{Deserialize, Serialize};

/// Default base URL of the repository REST API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Feature flags controlling optional parts of the search UI.
///
/// Loaded from `config.toml`. Every flag defaults to `true`; a config file
/// only needs to list what it turns off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub share_search: bool,
    #[serde(default = "enabled")]
    pub favourites: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            share_search: true,
            favourites: true,
        }
    }
}

/// Where the repository API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert!(config.features.share_search);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            favourites = false
            "#,
        )
        .unwrap();
        assert!(!config.features.favourites);
        assert!(config.features.share_search);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://repo.example.edu/api"
            timeout_secs = 5

            [features]
            share_search = false
            favourites = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://repo.example.edu/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert!(!config.features.share_search);
        assert!(!config.features.favourites);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
