//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable that overrides the classifier endpoint URL.
pub const ENDPOINT_ENV_VAR: &str = "SENTIMENT_API_ENDPOINT";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// External classifier settings
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply environment overrides (currently only the classifier endpoint).
    pub fn apply_env(&mut self) {
        self.apply_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok());
    }

    /// Apply an endpoint override, ignoring empty values.
    pub fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint {
            if !endpoint.trim().is_empty() {
                self.classifier.endpoint = endpoint;
            }
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(AppError::config("server.bind_addr is empty"));
        }
        if self.classifier.endpoint.trim().is_empty() {
            return Err(AppError::config("classifier.endpoint is empty"));
        }
        if !self.classifier.endpoint.starts_with("http") {
            return Err(AppError::config(
                "classifier.endpoint must be an http(s) URL",
            ));
        }
        if self.classifier.timeout_secs == 0 {
            return Err(AppError::config("classifier.timeout_secs must be > 0"));
        }
        if self.database.url.trim().is_empty() {
            return Err(AppError::config("database.url is empty"));
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to
    #[serde(default = "defaults::bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::bind_addr(),
        }
    }
}

/// External classifier client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Prediction endpoint URL
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for outbound requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLx connection URL
    #[serde(default = "defaults::database_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::database_url(),
        }
    }
}

mod defaults {
    // Server defaults
    pub fn bind_addr() -> String {
        "127.0.0.1:8080".into()
    }

    // Classifier defaults
    pub fn endpoint() -> String {
        "http://127.0.0.1:5000/predict".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; sentiboard/1.0)".into()
    }

    // Database defaults
    pub fn database_url() -> String {
        "sqlite://sentiboard.db".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_endpoint_matches_documented_value() {
        let config = Config::default();
        assert_eq!(config.classifier.endpoint, "http://127.0.0.1:5000/predict");
        assert_eq!(config.classifier.timeout_secs, 30);
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.classifier.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_endpoint() {
        let mut config = Config::default();
        config.classifier.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_override_replaces_default() {
        let mut config = Config::default();
        config.apply_endpoint_override(Some("http://10.0.0.1:9000/predict".to_string()));
        assert_eq!(config.classifier.endpoint, "http://10.0.0.1:9000/predict");
    }

    #[test]
    fn blank_endpoint_override_is_ignored() {
        let mut config = Config::default();
        config.apply_endpoint_override(Some("   ".to_string()));
        assert_eq!(config.classifier.endpoint, defaults::endpoint());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("[classifier]\nendpoint = \"http://host:5000/p\"\n").unwrap();
        assert_eq!(config.classifier.endpoint, "http://host:5000/p");
        assert_eq!(config.classifier.timeout_secs, 30);
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
    }
}
