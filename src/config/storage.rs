//! Storage-related configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::ConfigError;

/// Environment variable selecting the build output root.
pub const BUILD_ROOT_ENV: &str = "ZEPHYR_BUILD_OUTPUT_ROOT";

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory containing one subdirectory per build
    pub build_root: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            build_root: std::env::var(BUILD_ROOT_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default_build_root()),
        })
    }

    fn default_build_root() -> PathBuf {
        "./build_outputs".into()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            build_root: Self::default_build_root(),
        }
    }
}
