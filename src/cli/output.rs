//! Output formatting helpers for CLI commands

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

use crate::engine::ResourceDescriptor;
use crate::provider::MultiFactorMode;
use crate::registry::{Provenance, RegistrySnapshot};

/// Format a reconciled descriptor as a field/value table
pub fn format_descriptor_table(descriptor: &ResourceDescriptor) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    let mfa = match descriptor.multi_factor {
        MultiFactorMode::Off => "Off".yellow().to_string(),
        MultiFactorMode::Optional => "Optional".cyan().to_string(),
        MultiFactorMode::Required => "Required".green().to_string(),
    };

    table.add_row(vec![
        Cell::new("User directory"),
        Cell::new(&descriptor.user_directory_id),
    ]);
    table.add_row(vec![Cell::new("Multi-factor"), Cell::new(mfa)]);
    table.add_row(vec![
        Cell::new("TOTP enabled"),
        Cell::new(descriptor.totp_enabled),
    ]);
    table.add_row(vec![
        Cell::new("Public client"),
        Cell::new(&descriptor.public_client_id),
    ]);
    table.add_row(vec![
        Cell::new("Confidential client"),
        Cell::new(descriptor.confidential_client_id.as_deref().unwrap_or("-")),
    ]);
    table.add_row(vec![
        Cell::new("Federation pool"),
        Cell::new(format!(
            "{} ({})",
            descriptor.federation_pool_name, descriptor.federation_pool_id
        )),
    ]);
    table.add_row(vec![
        Cell::new("Unauthenticated access"),
        Cell::new(descriptor.allows_unauthenticated),
    ]);
    table.add_row(vec![
        Cell::new("Authenticated role"),
        Cell::new(&descriptor.role_binding.authenticated_role_name),
    ]);
    table.add_row(vec![
        Cell::new("Unauthenticated role"),
        Cell::new(&descriptor.role_binding.unauthenticated_role_name),
    ]);

    table.to_string()
}

/// Format a reconciled descriptor as JSON
pub fn format_descriptor_json(descriptor: &ResourceDescriptor) -> String {
    serde_json::to_string_pretty(&json!({ "descriptor": descriptor }))
        .unwrap_or_else(|_| "{}".to_string())
}

/// Format the registry snapshot as a table
pub fn format_registry_table(snapshot: &RegistrySnapshot) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Name", "Provenance", "Linked"]);

    for category in snapshot.category_names() {
        for resource in snapshot.resources_in(category) {
            let provenance = match resource.provenance {
                Provenance::Created => "Created".cyan().to_string(),
                Provenance::Imported => "Imported".green().to_string(),
            };
            let linked = resource
                .linked_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                Cell::new(category),
                Cell::new(&resource.name),
                Cell::new(provenance),
                Cell::new(linked),
            ]);
        }
    }

    table.to_string()
}

/// Format the registry snapshot as JSON
pub fn format_registry_json(snapshot: &RegistrySnapshot) -> String {
    serde_json::to_string_pretty(&json!({ "registry": snapshot }))
        .unwrap_or_else(|_| "{}".to_string())
}
