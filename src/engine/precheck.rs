//! Local state inspection before any provider call.

use crate::registry::{Provenance, RegistrySnapshot, AUTH_CATEGORY};

/// Outcome of inspecting the local registry for prior auth resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecheckResult {
    /// No auth resource exists locally; reconciliation may proceed.
    Proceed,
    /// An auth resource exists locally (however it was created).
    AlreadyExists { name: String },
    /// An auth resource exists locally and was itself imported.
    AlreadyImported { name: String },
}

/// Inspect the registry snapshot for an existing auth-category resource.
///
/// Pure read, no side effects. The imported case is only reported after
/// existence is confirmed; it is the stricter condition and carries a
/// different remediation than plain existence.
pub fn precheck(registry: &RegistrySnapshot) -> PrecheckResult {
    let existing = registry.resources_in(AUTH_CATEGORY);
    let Some(first) = existing.first() else {
        return PrecheckResult::Proceed;
    };

    if let Some(imported) = existing
        .iter()
        .find(|r| r.provenance == Provenance::Imported)
    {
        return PrecheckResult::AlreadyImported {
            name: imported.name.clone(),
        };
    }

    PrecheckResult::AlreadyExists {
        name: first.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegisteredResource;

    fn resource(name: &str, provenance: Provenance) -> RegisteredResource {
        RegisteredResource {
            name: name.to_string(),
            provenance,
            linked_at: None,
        }
    }

    #[test]
    fn test_empty_registry_proceeds() {
        assert_eq!(precheck(&RegistrySnapshot::new()), PrecheckResult::Proceed);
    }

    #[test]
    fn test_other_categories_do_not_block() {
        let registry = RegistrySnapshot::with_category(
            "storage",
            vec![resource("uploads", Provenance::Created)],
        );
        assert_eq!(precheck(&registry), PrecheckResult::Proceed);
    }

    #[test]
    fn test_created_resource_reports_already_exists() {
        let registry = RegistrySnapshot::with_category(
            AUTH_CATEGORY,
            vec![resource("main", Provenance::Created)],
        );
        assert_eq!(
            precheck(&registry),
            PrecheckResult::AlreadyExists {
                name: "main".to_string()
            }
        );
    }

    #[test]
    fn test_imported_resource_reports_already_imported() {
        let registry = RegistrySnapshot::with_category(
            AUTH_CATEGORY,
            vec![resource("main", Provenance::Imported)],
        );
        assert_eq!(
            precheck(&registry),
            PrecheckResult::AlreadyImported {
                name: "main".to_string()
            }
        );
    }

    #[test]
    fn test_imported_wins_over_created_when_both_present() {
        let registry = RegistrySnapshot::with_category(
            AUTH_CATEGORY,
            vec![
                resource("created-one", Provenance::Created),
                resource("imported-one", Provenance::Imported),
            ],
        );
        assert_eq!(
            precheck(&registry),
            PrecheckResult::AlreadyImported {
                name: "imported-one".to_string()
            }
        );
    }
}
