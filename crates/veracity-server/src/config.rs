//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, inference endpoint and
//! timeout, and the database path. The inference endpoint can also be
//! supplied through one environment variable, resolved once at process
//! start - the gateway itself never reads ambient state.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding the configured inference endpoint
pub const INFERENCE_URL_ENV: &str = "VERACITY_INFERENCE_URL";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 3001)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Full URL of the inference service endpoint, path included.
    /// The gateway strips trailing slashes but never appends a path.
    #[serde(default = "default_inference_url")]
    pub inference_url: String,

    /// Timeout for one inference request, in seconds
    #[serde(default = "default_inference_timeout")]
    pub inference_timeout_secs: u64,

    /// SQLite database path
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3001
}

fn default_inference_url() -> String {
    veracity_gateway::http::DEFAULT_ENDPOINT.to_string()
}

fn default_inference_timeout() -> u64 {
    veracity_gateway::http::DEFAULT_TIMEOUT_SECS
}

fn default_db_path() -> String {
    "veracity.db".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.inference_url.trim().is_empty() {
            return Err(ConfigError::MissingField("inference_url".to_string()));
        }
        Ok(())
    }

    /// Apply the `VERACITY_INFERENCE_URL` environment override, if set.
    ///
    /// Called once at process start; the resolved value is passed into
    /// the gateway constructor and never re-read.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(INFERENCE_URL_ENV) {
            if !url.trim().is_empty() {
                self.inference_url = url;
            }
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            inference_url: default_inference_url(),
            inference_timeout_secs: default_inference_timeout(),
            db_path: default_db_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 3001);
        assert_eq!(config.inference_url, "http://127.0.0.1:8000/verify");
        assert_eq!(config.inference_timeout_secs, 30);
        assert_eq!(config.db_path, "veracity.db");
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            inference_url = "http://inference.internal:8000/verify"
            inference_timeout_secs = 10
            db_path = "/var/lib/veracity/records.db"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(
            config.inference_url,
            "http://inference.internal:8000/verify"
        );
        assert_eq!(config.inference_timeout_secs, 10);
        assert_eq!(config.db_path, "/var/lib/veracity/records.db");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str(r#"bind_port = 8080"#).unwrap();
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.inference_url, "http://127.0.0.1:8000/verify");
    }
}
