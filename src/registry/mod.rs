//! Local resource registry module.
//!
//! Provides a read-only snapshot of the project's resource registry file
//! (`tether-meta.json`). The engine consults it to detect prior linking of a
//! resource category; nothing in this crate writes through it during
//! reconciliation.

mod error;

pub use error::RegistryError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Category name for authentication resources.
pub const AUTH_CATEGORY: &str = "auth";

/// How a registered resource came to exist locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Created and managed by this project
    Created,
    /// Linked from a pre-existing cloud resource
    Imported,
}

/// A single resource entry in the local registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredResource {
    pub name: String,
    pub provenance: Provenance,
    /// When the resource was linked into the project, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_at: Option<DateTime<Utc>>,
}

/// Read-only snapshot of the registry file, keyed by resource category.
///
/// A missing registry file is equivalent to an empty snapshot: a fresh
/// project has simply linked nothing yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrySnapshot {
    categories: BTreeMap<String, Vec<RegisteredResource>>,
}

impl RegistrySnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from explicit category entries (test and tooling use).
    pub fn with_category(category: &str, resources: Vec<RegisteredResource>) -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(category.to_string(), resources);
        Self { categories }
    }

    /// Load the registry file at `path`.
    ///
    /// A missing file yields an empty snapshot; an unreadable or malformed
    /// file is an error, never silently treated as empty.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => {
                return Err(RegistryError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&content).map_err(|e| RegistryError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Entries registered under a category, in file order.
    pub fn resources_in(&self, category: &str) -> &[RegisteredResource] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All category names present in the snapshot.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Total number of registered resources across categories.
    pub fn resource_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
