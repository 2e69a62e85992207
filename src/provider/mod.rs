//! Provider client facade - the read-only capability set over the cloud
//! identity provider.
//!
//! This module provides the `ProviderClient` trait and supporting types that
//! abstract provider-specific plumbing for directory lookup, client listing,
//! and federation pool inspection. The engine only ever sees this trait;
//! concrete backends are resolved through `factory`.

use async_trait::async_trait;

pub mod error;
pub mod factory;
pub mod fixture;
pub mod types;

// Re-export key types for convenience
pub use error::{ProviderFault, ProviderResource};
pub use types::{
    ClientApplication, DirectoryDetails, FederationPoolCandidate, IdentityProviderRef,
    MultiFactorConfig, MultiFactorMode, RoleBinding,
};

/// Unified read-only interface over the cloud identity provider.
///
/// All five operations are idempotent reads; retries, pagination, and
/// authentication belong to the implementation, never to the engine calling
/// through this trait.
///
/// # Object Safety
///
/// The trait is object-safe and used as `&dyn ProviderClient`; all async
/// methods use `async_trait` for trait-object compatibility.
///
/// # Fault contract
///
/// Every operation fails with a `ProviderFault`. Implementations must report
/// a missing target as `ProviderFault::NotFound` so the engine can surface a
/// precise error instead of an opaque one.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Fetch details for a user directory by id.
    async fn get_user_directory_details(
        &self,
        directory_id: &str,
    ) -> Result<DirectoryDetails, ProviderFault>;

    /// List the client applications registered on a directory.
    ///
    /// Order is treated as stable for a given query but is not guaranteed
    /// across calls; selection policies downstream document this.
    async fn list_client_applications(
        &self,
        directory_id: &str,
    ) -> Result<Vec<ClientApplication>, ProviderFault>;

    /// Fetch the directory's multi-factor configuration.
    async fn get_multi_factor_config(
        &self,
        directory_id: &str,
    ) -> Result<MultiFactorConfig, ProviderFault>;

    /// List all federation pools visible to the caller.
    async fn list_federation_pools(&self) -> Result<Vec<FederationPoolCandidate>, ProviderFault>;

    /// Fetch the role bindings attached to a federation pool.
    ///
    /// Returns `Ok(None)` when the pool exists but has no roles attached;
    /// that condition is not a fault at this layer.
    async fn get_federation_pool_role_bindings(
        &self,
        pool_id: &str,
    ) -> Result<Option<RoleBinding>, ProviderFault>;
}
