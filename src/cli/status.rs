//! Status command implementation

use anyhow::Context;

use crate::cli::output::{format_registry_json, format_registry_table};
use crate::cli::StatusArgs;
use crate::config::TetherConfig;
use crate::registry::RegistrySnapshot;

/// Handle `tether status`: render the local registry snapshot.
pub fn handle_status(args: &StatusArgs) -> anyhow::Result<String> {
    let config = if args.config.exists() {
        TetherConfig::load(Some(&args.config))?
    } else {
        TetherConfig::default()
    };
    let config = config.with_env_overrides();

    let snapshot = RegistrySnapshot::load(&config.project.registry_path)
        .context("failed to read local registry")?;

    Ok(render_status(&snapshot, args.json))
}

fn render_status(snapshot: &RegistrySnapshot, json: bool) -> String {
    if json {
        format_registry_json(snapshot)
    } else if snapshot.resource_count() == 0 {
        "No resources linked yet.".to_string()
    } else {
        format_registry_table(snapshot)
    }
}
