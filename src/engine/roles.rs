//! Role binding resolution for a matched federation pool.

use crate::provider::{ProviderClient, RoleBinding};

use super::error::ReconcileError;

/// Fetch the role bindings for a matched pool.
///
/// A pool that exists without any attached roles is `NoRoleBinding`;
/// provider faults pass through wrapped.
pub async fn resolve_roles(
    provider: &dyn ProviderClient,
    pool_id: &str,
) -> Result<RoleBinding, ReconcileError> {
    match provider.get_federation_pool_role_bindings(pool_id).await? {
        Some(binding) => Ok(binding),
        None => Err(ReconcileError::NoRoleBinding {
            pool_id: pool_id.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::ReconcileErrorKind;
    use crate::provider::fixture::{FixtureProvider, ProviderSnapshot};
    use crate::provider::FederationPoolCandidate;

    fn provider_with_pool(pool_id: &str, binding: Option<RoleBinding>) -> FixtureProvider {
        let mut snapshot = ProviderSnapshot {
            federation_pools: vec![FederationPoolCandidate {
                id: pool_id.to_string(),
                name: pool_id.to_string(),
                allows_unauthenticated: false,
                identity_providers: vec![],
            }],
            ..Default::default()
        };
        if let Some(binding) = binding {
            snapshot.role_bindings.insert(pool_id.to_string(), binding);
        }
        FixtureProvider::new(snapshot)
    }

    fn binding() -> RoleBinding {
        RoleBinding {
            authenticated_role_arn: "arn:authRole:123".to_string(),
            authenticated_role_name: "authRole".to_string(),
            unauthenticated_role_arn: "arn:unAuthRole:123".to_string(),
            unauthenticated_role_name: "unAuthRole".to_string(),
        }
    }

    #[tokio::test]
    async fn test_attached_roles_resolve() {
        let provider = provider_with_pool("identity-pool-123", Some(binding()));
        let resolved = resolve_roles(&provider, "identity-pool-123").await.unwrap();
        assert_eq!(resolved.authenticated_role_name, "authRole");
    }

    #[tokio::test]
    async fn test_pool_without_roles_is_no_role_binding() {
        let provider = provider_with_pool("identity-pool-123", None);
        let err = resolve_roles(&provider, "identity-pool-123")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ReconcileErrorKind::NoRoleBinding);
        assert!(err.to_string().contains("identity-pool-123"));
    }

    #[tokio::test]
    async fn test_unknown_pool_is_provider_error() {
        let provider = provider_with_pool("identity-pool-123", Some(binding()));
        let err = resolve_roles(&provider, "other-pool").await.unwrap_err();
        assert_eq!(err.kind(), ReconcileErrorKind::Provider);
    }
}
