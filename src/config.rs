//! Runtime configuration.
//!
//! Two externally supplied origins: the catalog/order API and the CDN
//! that product images are resolved against. Values come from defaults,
//! the environment, or builder-style overrides.

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "LAREK_API_URL";
/// Environment variable overriding the CDN base URL.
pub const ENV_CDN_URL: &str = "LAREK_CDN_URL";
/// Environment variable enabling file logging (path to the log file).
pub const ENV_LOG_FILE: &str = "LAREK_LOG";

const DEFAULT_API_URL: &str = "https://larek-api.nomoreparties.co/api/weblarek";
const DEFAULT_CDN_URL: &str = "https://larek-api.nomoreparties.co/content/weblarek";

/// Configuration for the storefront client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the catalog/order API.
    pub api_url: String,
    /// Base URL product image paths are resolved against.
    pub cdn_url: String,
    /// Log file path; logging is disabled when `None` (the TUI owns
    /// stdout).
    pub log_file: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cdn_url: DEFAULT_CDN_URL.to_string(),
            log_file: None,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration from the environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.api_url = url;
        }
        if let Ok(url) = std::env::var(ENV_CDN_URL) {
            config.cdn_url = url;
        }
        if let Ok(path) = std::env::var(ENV_LOG_FILE) {
            config.log_file = Some(path);
        }
        config
    }

    /// Override the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the CDN base URL.
    pub fn with_cdn_url(mut self, url: impl Into<String>) -> Self {
        self.cdn_url = url.into();
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.cdn_url, DEFAULT_CDN_URL);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = StoreConfig::new()
            .with_api_url("http://localhost:9000/api")
            .with_cdn_url("http://localhost:9000/content")
            .with_log_file("/tmp/larek.log");
        assert_eq!(config.api_url, "http://localhost:9000/api");
        assert_eq!(config.cdn_url, "http://localhost:9000/content");
        assert_eq!(config.log_file.as_deref(), Some("/tmp/larek.log"));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var(ENV_API_URL, "http://env-api");
        std::env::set_var(ENV_CDN_URL, "http://env-cdn");
        std::env::set_var(ENV_LOG_FILE, "/tmp/env.log");

        let config = StoreConfig::from_env();
        assert_eq!(config.api_url, "http://env-api");
        assert_eq!(config.cdn_url, "http://env-cdn");
        assert_eq!(config.log_file.as_deref(), Some("/tmp/env.log"));

        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_CDN_URL);
        std::env::remove_var(ENV_LOG_FILE);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_CDN_URL);
        std::env::remove_var(ENV_LOG_FILE);

        let config = StoreConfig::from_env();
        assert_eq!(config, StoreConfig::default());
    }
}
