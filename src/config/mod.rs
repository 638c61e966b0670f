//! Centralized application configuration
//!
//! Environment variables with sensible defaults; validated once at startup
//! and treated as immutable afterwards.

pub mod error;
pub mod network;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use network::NetworkConfig;
pub use storage::StorageConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load complete application configuration from environment variables
    ///
    /// This validates all configuration values and returns an error if any
    /// are invalid. All optional values have sensible defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            network: NetworkConfig::load()?,
            storage: StorageConfig::load()?,
        })
    }
}
