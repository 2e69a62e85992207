//! Import reconciliation engine.
//!
//! Takes a caller-supplied identifier set for a pre-existing auth backend,
//! reconciles it against live provider state, and produces either a single
//! internally-consistent `ResourceDescriptor` or a classified
//! `ReconcileError`. The engine only reads: no provider mutation, no
//! registry writes, no caching across attempts.

pub mod classify;
pub mod descriptor;
pub mod error;
pub mod matcher;
pub mod precheck;
pub mod request;
pub mod roles;

pub use classify::{classify, ClassifiedClients};
pub use descriptor::{build_descriptor, ResourceDescriptor};
pub use error::{ReconcileError, ReconcileErrorKind};
pub use matcher::match_pool;
pub use precheck::{precheck, PrecheckResult};
pub use request::{ImportRequest, SUPPORTED_VERSION};
pub use roles::resolve_roles;

use uuid::Uuid;

use crate::provider::{ProviderClient, ProviderResource};
use crate::registry::RegistrySnapshot;

/// Stages of one reconciliation attempt, in the only order they can occur.
///
/// Transitions are strictly forward; each stage's output is a precondition
/// for the next. Failure is reachable from every non-terminal stage and ends
/// the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReconcileStage {
    Start,
    Precheck,
    DirectoryFetched,
    ClientsClassified,
    PoolMatched,
    RolesResolved,
    Built,
}

impl ReconcileStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileStage::Start => "start",
            ReconcileStage::Precheck => "precheck",
            ReconcileStage::DirectoryFetched => "directory_fetched",
            ReconcileStage::ClientsClassified => "clients_classified",
            ReconcileStage::PoolMatched => "pool_matched",
            ReconcileStage::RolesResolved => "roles_resolved",
            ReconcileStage::Built => "built",
        }
    }
}

/// Run one reconciliation attempt.
///
/// Sequential by construction: the directory must be confirmed before its
/// clients are listed, clients classified before pools are matched, a pool
/// matched before roles are resolved. The local precheck runs before any
/// provider call, so warnings about local state are never masked by a slower
/// network failure and a blocked attempt costs zero provider requests.
pub async fn reconcile(
    request: &ImportRequest,
    registry: &RegistrySnapshot,
    provider: &dyn ProviderClient,
) -> Result<ResourceDescriptor, ReconcileError> {
    let attempt_id = Uuid::new_v4();
    tracing::debug!(
        %attempt_id,
        directory_id = %request.user_directory_id,
        stage = ReconcileStage::Start.as_str(),
        "reconciliation attempt started"
    );

    request.validate()?;

    tracing::debug!(stage = ReconcileStage::Precheck.as_str(), "inspecting local registry");
    match precheck(registry) {
        PrecheckResult::Proceed => {}
        PrecheckResult::AlreadyExists { name } => {
            return Err(ReconcileError::AlreadyExists { name });
        }
        PrecheckResult::AlreadyImported { name } => {
            return Err(ReconcileError::AlreadyImported { name });
        }
    }

    let directory = match provider
        .get_user_directory_details(&request.user_directory_id)
        .await
    {
        Ok(directory) => directory,
        Err(fault) if fault.is_not_found(ProviderResource::UserDirectory) => {
            return Err(ReconcileError::DirectoryNotFound {
                id: request.user_directory_id.clone(),
            });
        }
        Err(fault) => return Err(fault.into()),
    };
    tracing::debug!(
        stage = ReconcileStage::DirectoryFetched.as_str(),
        directory_id = %directory.id,
        multi_factor = ?directory.multi_factor,
        "directory confirmed"
    );

    let client_list = provider.list_client_applications(&directory.id).await?;
    let clients = classify(&directory.id, &client_list)?;
    tracing::debug!(
        stage = ReconcileStage::ClientsClassified.as_str(),
        public_client_id = %clients.public.client_id,
        has_confidential = clients.confidential.is_some(),
        "clients classified"
    );

    let mfa = provider.get_multi_factor_config(&directory.id).await?;
    if mfa.mode != directory.multi_factor {
        tracing::debug!(
            directory_mode = ?directory.multi_factor,
            config_mode = ?mfa.mode,
            "directory and MFA config disagree on mode; MFA config wins"
        );
    }

    let pools = provider.list_federation_pools().await?;
    let pool = match_pool(
        pools,
        &directory.id,
        &clients.public.client_id,
        clients.confidential.as_ref().map(|c| c.client_id.as_str()),
    )?;
    if pool.id != request.federation_pool_id {
        tracing::debug!(
            requested = %request.federation_pool_id,
            matched = %pool.id,
            "matched pool differs from the requested id; provider state wins"
        );
    }
    tracing::debug!(
        stage = ReconcileStage::PoolMatched.as_str(),
        pool_id = %pool.id,
        "federation pool matched"
    );

    let role_binding = resolve_roles(provider, &pool.id).await?;
    tracing::debug!(
        stage = ReconcileStage::RolesResolved.as_str(),
        authenticated_role = %role_binding.authenticated_role_name,
        "roles resolved"
    );

    let descriptor = build_descriptor(directory, mfa, clients, pool, role_binding);
    tracing::debug!(stage = ReconcileStage::Built.as_str(), "descriptor built");
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_is_strictly_forward() {
        let stages = [
            ReconcileStage::Start,
            ReconcileStage::Precheck,
            ReconcileStage::DirectoryFetched,
            ReconcileStage::ClientsClassified,
            ReconcileStage::PoolMatched,
            ReconcileStage::RolesResolved,
            ReconcileStage::Built,
        ];
        for pair in stages.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(ReconcileStage::Precheck.as_str(), "precheck");
        assert_eq!(ReconcileStage::Built.as_str(), "built");
    }
}
