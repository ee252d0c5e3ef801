//! # Server Configuration
//!
//! Host, port, and CORS settings for the HTTP server, loadable from a JSON
//! config file with serde defaults for every field.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, which means permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a config with a specific port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: ServerConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError("port must be > 0".to_string()));
        }
        Ok(())
    }

    /// Socket address string for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration loading/validation error
#[derive(Debug, Clone, thiserror::Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_with_port() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_json_gets_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 4000}"#).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_zero_port_rejected() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 0}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
