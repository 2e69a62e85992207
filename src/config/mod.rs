//! Configuration module for Tether
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`TETHER_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use tether::config::TetherConfig;
//!
//! // Load defaults
//! let config = TetherConfig::default();
//! assert_eq!(config.logging.level, "info");
//!
//! // Parse from TOML
//! let toml = r#"
//! [project]
//! name = "storefront"
//! "#;
//! let config: TetherConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.project.name, "storefront");
//! ```

pub mod error;
pub mod logging;
pub mod project;
pub mod provider;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use project::ProjectConfig;
pub use provider::{ProviderConfig, ProviderKind};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the Tether CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TetherConfig {
    /// Local project settings
    pub project: ProjectConfig,
    /// Provider backend settings
    pub provider: ProviderConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl TetherConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports TETHER_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("TETHER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TETHER_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        if let Ok(registry) = std::env::var("TETHER_REGISTRY_PATH") {
            self.project.registry_path = registry.into();
        }
        if let Ok(snapshot) = std::env::var("TETHER_PROVIDER_SNAPSHOT") {
            self.provider.snapshot_path = Some(snapshot.into());
        }
        if let Ok(region) = std::env::var("TETHER_PROVIDER_REGION") {
            self.provider.region = Some(region);
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project.name.is_empty() {
            return Err(ConfigError::Validation {
                field: "project.name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.project.registry_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                field: "project.registry_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
