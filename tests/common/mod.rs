//! Shared test utilities for Tether integration tests.
//!
//! Provides a call-counting fake provider, snapshot builders, and registry
//! builders to reduce duplication across test files.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use tether::engine::ImportRequest;
use tether::provider::fixture::{FixtureProvider, ProviderSnapshot};
use tether::provider::{
    ClientApplication, DirectoryDetails, FederationPoolCandidate, IdentityProviderRef,
    MultiFactorConfig, MultiFactorMode, ProviderClient, ProviderFault, RoleBinding,
};
use tether::registry::{Provenance, RegisteredResource, RegistrySnapshot, AUTH_CATEGORY};

// =============================================================================
// Well-Known Test Identifiers
// =============================================================================

pub const USER_POOL_ID: &str = "user-pool-123";
pub const IDENTITY_POOL_ID: &str = "identity-pool-123";
pub const WEB_CLIENT_ID: &str = "web-app-client-123";
pub const NATIVE_CLIENT_ID: &str = "native-app-client-123";

// =============================================================================
// Provider Snapshot Builders
// =============================================================================

/// Snapshot matching the canonical happy path: one directory with a public
/// and a confidential client, one pool referencing both, roles attached.
pub fn full_snapshot() -> ProviderSnapshot {
    let mut snapshot = ProviderSnapshot {
        directories: vec![DirectoryDetails {
            id: USER_POOL_ID.to_string(),
            multi_factor: MultiFactorMode::Required,
        }],
        clients: vec![
            ClientApplication {
                owner_directory_id: USER_POOL_ID.to_string(),
                client_id: WEB_CLIENT_ID.to_string(),
                has_shared_secret: false,
            },
            ClientApplication {
                owner_directory_id: USER_POOL_ID.to_string(),
                client_id: NATIVE_CLIENT_ID.to_string(),
                has_shared_secret: true,
            },
        ],
        federation_pools: vec![pool(IDENTITY_POOL_ID)],
        ..Default::default()
    };
    snapshot.mfa_configs.insert(
        USER_POOL_ID.to_string(),
        MultiFactorConfig {
            mode: MultiFactorMode::Required,
            totp_enabled: true,
        },
    );
    snapshot
        .role_bindings
        .insert(IDENTITY_POOL_ID.to_string(), role_binding());
    snapshot
}

/// The canonical pool, with providers naming the directory for both clients.
pub fn pool(id: &str) -> FederationPoolCandidate {
    FederationPoolCandidate {
        id: id.to_string(),
        name: "identity-pool".to_string(),
        allows_unauthenticated: true,
        identity_providers: vec![
            IdentityProviderRef {
                provider_name: format!("web-provider-{USER_POOL_ID}"),
                client_id: WEB_CLIENT_ID.to_string(),
            },
            IdentityProviderRef {
                provider_name: format!("native-provider-{USER_POOL_ID}"),
                client_id: NATIVE_CLIENT_ID.to_string(),
            },
        ],
    }
}

pub fn role_binding() -> RoleBinding {
    RoleBinding {
        authenticated_role_arn: "arn:authRole:123".to_string(),
        authenticated_role_name: "authRole".to_string(),
        unauthenticated_role_arn: "arn:unAuthRole:123".to_string(),
        unauthenticated_role_name: "unAuthRole".to_string(),
    }
}

// =============================================================================
// Request and Registry Builders
// =============================================================================

pub fn import_request() -> ImportRequest {
    ImportRequest {
        version: 1,
        user_directory_id: USER_POOL_ID.to_string(),
        federation_pool_id: IDENTITY_POOL_ID.to_string(),
        public_client_id: Some(WEB_CLIENT_ID.to_string()),
        confidential_client_id: Some(NATIVE_CLIENT_ID.to_string()),
    }
}

pub fn empty_registry() -> RegistrySnapshot {
    RegistrySnapshot::new()
}

pub fn registry_with_auth(provenance: Provenance) -> RegistrySnapshot {
    RegistrySnapshot::with_category(
        AUTH_CATEGORY,
        vec![RegisteredResource {
            name: "existing-auth".to_string(),
            provenance,
            linked_at: None,
        }],
    )
}

// =============================================================================
// Counting Provider Fake
// =============================================================================

/// Which facade operation an injected fault applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Directory,
    Clients,
    Mfa,
    Pools,
    Roles,
}

#[derive(Debug, Default)]
pub struct CallCounts {
    pub directory: AtomicUsize,
    pub clients: AtomicUsize,
    pub mfa: AtomicUsize,
    pub pools: AtomicUsize,
    pub roles: AtomicUsize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.directory.load(Ordering::SeqCst)
            + self.clients.load(Ordering::SeqCst)
            + self.mfa.load(Ordering::SeqCst)
            + self.pools.load(Ordering::SeqCst)
            + self.roles.load(Ordering::SeqCst)
    }
}

/// Fake provider that answers from a snapshot, counts every call, and can
/// inject an access-denied fault on one operation.
pub struct CountingProvider {
    inner: FixtureProvider,
    pub calls: CallCounts,
    deny: Option<Op>,
}

impl CountingProvider {
    pub fn new(snapshot: ProviderSnapshot) -> Self {
        Self {
            inner: FixtureProvider::new(snapshot),
            calls: CallCounts::default(),
            deny: None,
        }
    }

    pub fn denying(snapshot: ProviderSnapshot, op: Op) -> Self {
        Self {
            inner: FixtureProvider::new(snapshot),
            calls: CallCounts::default(),
            deny: Some(op),
        }
    }

    fn check_denied(&self, op: Op) -> Result<(), ProviderFault> {
        if self.deny == Some(op) {
            return Err(ProviderFault::AccessDenied(
                "injected access-denied fault".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProviderClient for CountingProvider {
    async fn get_user_directory_details(
        &self,
        directory_id: &str,
    ) -> Result<DirectoryDetails, ProviderFault> {
        self.calls.directory.fetch_add(1, Ordering::SeqCst);
        self.check_denied(Op::Directory)?;
        self.inner.get_user_directory_details(directory_id).await
    }

    async fn list_client_applications(
        &self,
        directory_id: &str,
    ) -> Result<Vec<ClientApplication>, ProviderFault> {
        self.calls.clients.fetch_add(1, Ordering::SeqCst);
        self.check_denied(Op::Clients)?;
        self.inner.list_client_applications(directory_id).await
    }

    async fn get_multi_factor_config(
        &self,
        directory_id: &str,
    ) -> Result<MultiFactorConfig, ProviderFault> {
        self.calls.mfa.fetch_add(1, Ordering::SeqCst);
        self.check_denied(Op::Mfa)?;
        self.inner.get_multi_factor_config(directory_id).await
    }

    async fn list_federation_pools(&self) -> Result<Vec<FederationPoolCandidate>, ProviderFault> {
        self.calls.pools.fetch_add(1, Ordering::SeqCst);
        self.check_denied(Op::Pools)?;
        self.inner.list_federation_pools().await
    }

    async fn get_federation_pool_role_bindings(
        &self,
        pool_id: &str,
    ) -> Result<Option<RoleBinding>, ProviderFault> {
        self.calls.roles.fetch_add(1, Ordering::SeqCst);
        self.check_denied(Op::Roles)?;
        self.inner.get_federation_pool_role_bindings(pool_id).await
    }
}
