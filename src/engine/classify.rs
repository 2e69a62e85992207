//! Client application classification.

use crate::provider::ClientApplication;

use super::error::ReconcileError;

/// The canonical public/confidential client pair for a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedClients {
    /// First client without a shared secret, in provider order
    pub public: ClientApplication,
    /// First client with a shared secret, if any
    pub confidential: Option<ClientApplication>,
}

/// Partition client applications into public and confidential classes and
/// pick the canonical representative of each.
///
/// Selection among multiple candidates in a class is first-in-provider-order.
/// Provider order is stable for a given query but not guaranteed across
/// calls; this is a documented limitation of the selection policy, kept
/// deliberately instead of failing closed the way pool matching does.
///
/// A directory with zero public clients cannot be imported: downstream
/// browser/native flows require a client without a shared secret.
pub fn classify(
    directory_id: &str,
    clients: &[ClientApplication],
) -> Result<ClassifiedClients, ReconcileError> {
    let public = clients
        .iter()
        .find(|c| !c.has_shared_secret)
        .cloned()
        .ok_or_else(|| ReconcileError::NoPublicClient {
            directory_id: directory_id.to_string(),
        })?;

    let confidential = clients.iter().find(|c| c.has_shared_secret).cloned();

    Ok(ClassifiedClients {
        public,
        confidential,
    })
}
