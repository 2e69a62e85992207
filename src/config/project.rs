//! Project configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local project settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name used in logs and registry entries
    pub name: String,
    /// Path to the local resource registry file
    pub registry_path: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            registry_path: PathBuf::from("tether-meta.json"),
        }
    }
}
