//! Tap configuration
//!
//! Credentials and endpoint come from the environment, from a JSON config
//! file, or both; file values take precedence. The API key is the only
//! required field.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.oncall.example.com";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "ONCALL_API_KEY";

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "ONCALL_ENDPOINT";

/// Tap configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API key used to authenticate against the source API
    #[serde(default)]
    pub api_key: String,

    /// API endpoint; the production endpoint when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Config {
    /// Load configuration from the environment, merged with an optional
    /// JSON config file. File values win over environment values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::from_env();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .map_err(|e| Error::config(format!("reading {}: {e}", path.display())))?;
            let file: Config = serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("parsing {}: {e}", path.display())))?;

            if !file.api_key.is_empty() {
                config.api_key = file.api_key;
            }
            if file.endpoint.is_some() {
                config.endpoint = file.endpoint;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Read configuration from environment variables only
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(ENV_API_KEY).unwrap_or_default(),
            endpoint: std::env::var(ENV_ENDPOINT).ok().filter(|e| !e.is_empty()),
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        Ok(())
    }

    /// The endpoint to connect to
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_requires_api_key() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: api_key");

        let config = Config {
            api_key: "key".to_string(),
            endpoint: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_defaults() {
        let config = Config {
            api_key: "key".to_string(),
            endpoint: None,
        };
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);

        let config = Config {
            api_key: "key".to_string(),
            endpoint: Some("https://api.staging.example.com".to_string()),
        };
        assert_eq!(config.endpoint(), "https://api.staging.example.com");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"api_key": "from-file", "endpoint": "https://api.test.example.com"}"#)
            .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.endpoint(), "https://api.test.example.com");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"api_key = oops").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
