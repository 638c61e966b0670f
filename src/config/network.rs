//! Network-related configuration

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Network-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Address the HTTP listener binds to
    pub http_bind_addr: String,
    /// Port the HTTP listener binds to
    pub http_port: u16,
}

impl NetworkConfig {
    /// Load network configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let http_port = match std::env::var("HTTP_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HTTP_PORT".to_string(),
                value: raw,
                reason: "expected a port number".to_string(),
            })?,
            Err(_) => Self::default_http_port(),
        };

        Ok(Self {
            http_bind_addr: std::env::var("HTTP_BIND_ADDR")
                .unwrap_or_else(|_| Self::default_http_bind_addr()),
            http_port,
        })
    }

    // Default value functions
    fn default_http_bind_addr() -> String {
        "0.0.0.0".to_string()
    }
    fn default_http_port() -> u16 {
        8000
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_bind_addr: Self::default_http_bind_addr(),
            http_port: Self::default_http_port(),
        }
    }
}
