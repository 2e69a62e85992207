//! Provider backend configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Which provider backend to construct at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// File-backed snapshot provider (offline dry-runs and tests)
    #[default]
    Fixture,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixture" => Ok(ProviderKind::Fixture),
            _ => Err(format!("Unknown provider kind: {}", s)),
        }
    }
}

/// Provider backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// Snapshot file for the fixture backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
    /// Region label recorded in logs; the fixture backend does not use it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_default_is_fixture() {
        assert_eq!(ProviderKind::default(), ProviderKind::Fixture);
    }

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!(
            ProviderKind::from_str("fixture").unwrap(),
            ProviderKind::Fixture
        );
        assert!(ProviderKind::from_str("live").is_err());
    }
}
