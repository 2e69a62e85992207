//! Provider factory for creating `ProviderClient` trait objects from
//! configuration.
//!
//! Backends are resolved statically here at startup; the engine itself stays
//! provider-agnostic and only sees the trait.

use std::sync::Arc;

use super::fixture::FixtureProvider;
use super::{ProviderClient, ProviderFault};
use crate::config::{ProviderConfig, ProviderKind};

/// Create a provider client from configuration.
///
/// Returns an `Arc<dyn ProviderClient>` trait object usable by the engine
/// and the CLI handlers.
///
/// # Errors
///
/// `ProviderFault::Configuration` when the backend cannot be constructed
/// (e.g. a fixture backend without a snapshot path); load-time faults of the
/// backend itself propagate unchanged.
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn ProviderClient>, ProviderFault> {
    match config.kind {
        ProviderKind::Fixture => {
            let path = config.snapshot_path.as_deref().ok_or_else(|| {
                ProviderFault::Configuration(
                    "fixture provider requires 'snapshot_path' in [provider]".to_string(),
                )
            })?;
            Ok(Arc::new(FixtureProvider::load(path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_without_snapshot_path_is_configuration_error() {
        let config = ProviderConfig {
            kind: ProviderKind::Fixture,
            snapshot_path: None,
            region: None,
        };
        let Err(err) = create_provider(&config) else {
            panic!("expected create_provider to fail");
        };
        assert!(matches!(err, ProviderFault::Configuration(_)));
    }

    #[test]
    fn test_fixture_with_snapshot_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{}").unwrap();

        let config = ProviderConfig {
            kind: ProviderKind::Fixture,
            snapshot_path: Some(path),
            region: None,
        };
        assert!(create_provider(&config).is_ok());
    }
}
