//! Federation pool matching.

use crate::provider::FederationPoolCandidate;

use super::error::ReconcileError;

/// Select the single federation pool wired to the given directory and
/// clients.
///
/// A pool survives when at least one of its identity providers names the
/// directory (the provider name carries the directory id as an embedded
/// token) and is bound to the public or the confidential client id. All
/// comparisons are case-sensitive; the directory token is matched by
/// containment, client ids by exact equality.
///
/// Exactly one survivor is returned. Zero survivors and multiple survivors
/// are both errors; with multiple equally-valid matches the engine refuses
/// to guess, since picking silently could bind the wrong trust relationship.
pub fn match_pool(
    pools: Vec<FederationPoolCandidate>,
    directory_id: &str,
    public_client_id: &str,
    confidential_client_id: Option<&str>,
) -> Result<FederationPoolCandidate, ReconcileError> {
    let mut survivors: Vec<FederationPoolCandidate> = pools
        .into_iter()
        .filter(|pool| {
            pool.identity_providers.iter().any(|ip| {
                ip.provider_name.contains(directory_id)
                    && (ip.client_id == public_client_id
                        || confidential_client_id == Some(ip.client_id.as_str()))
            })
        })
        .collect();

    match survivors.len() {
        0 => Err(ReconcileError::NoMatchingFederationPool {
            directory_id: directory_id.to_string(),
        }),
        1 => Ok(survivors.remove(0)),
        _ => Err(ReconcileError::AmbiguousFederationPool {
            directory_id: directory_id.to_string(),
            candidates: survivors.into_iter().map(|p| p.id).collect(),
        }),
    }
}
