//! Import command implementation

use anyhow::Context;
use std::io::Read;
use std::path::Path;

use crate::cli::output::{format_descriptor_json, format_descriptor_table};
use crate::cli::ImportArgs;
use crate::config::TetherConfig;
use crate::engine::{reconcile, ImportRequest, ReconcileErrorKind};
use crate::provider::factory::create_provider;
use crate::registry::RegistrySnapshot;

/// Handle `tether import`.
///
/// Loads config and local registry, constructs the provider backend, runs
/// one reconciliation attempt, and renders the descriptor. Failure messages
/// carry the engine's stable kind and resolution hint.
pub async fn handle_import(args: &ImportArgs) -> anyhow::Result<String> {
    let mut config = load_config(&args.config)?.with_env_overrides();
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    config.validate()?;
    crate::logging::init(&config.logging);

    let payload = read_payload(&args.payload)?;
    let request = ImportRequest::from_json(&payload)
        .map_err(|e| anyhow::anyhow!("{}\n  hint: {}", e, e.hint()))?;

    let registry = RegistrySnapshot::load(&config.project.registry_path)
        .context("failed to read local registry")?;
    let provider = create_provider(&config.provider)?;

    match reconcile(&request, &registry, provider.as_ref()).await {
        Ok(descriptor) => {
            tracing::info!(
                directory_id = %descriptor.user_directory_id,
                pool_id = %descriptor.federation_pool_id,
                "import reconciled"
            );
            if args.json {
                Ok(format_descriptor_json(&descriptor))
            } else {
                Ok(format_descriptor_table(&descriptor))
            }
        }
        Err(e) => {
            // Local-state refusals are warnings in spirit; the exit code is
            // still non-zero so automation notices.
            match e.kind() {
                ReconcileErrorKind::AlreadyExists | ReconcileErrorKind::AlreadyImported => {
                    tracing::warn!(kind = %e.kind(), "import blocked by local state")
                }
                kind => tracing::error!(kind = %kind, "import failed"),
            }
            Err(anyhow::anyhow!("[{}] {}\n  hint: {}", e.kind(), e, e.hint()))
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<TetherConfig> {
    if path.exists() {
        Ok(TetherConfig::load(Some(path))?)
    } else {
        // No config file is fine; defaults plus env cover the common case.
        Ok(TetherConfig::default())
    }
}

fn read_payload(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read payload from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_payload_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, "{\"version\":1}").unwrap();
        assert_eq!(read_payload(&path).unwrap(), "{\"version\":1}");
    }

    #[test]
    fn test_read_payload_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_payload(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_load_config_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("tether.toml")).unwrap();
        assert_eq!(config.project.name, "default");
    }
}
