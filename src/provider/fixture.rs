//! File-backed provider client.
//!
//! Serves provider state from a JSON snapshot on disk. This is the backend
//! used for offline dry-runs and for exercising the full import path in
//! tests; live transports sit behind the same `ProviderClient` seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::error::{ProviderFault, ProviderResource};
use super::types::{
    ClientApplication, DirectoryDetails, FederationPoolCandidate, MultiFactorConfig, RoleBinding,
};
use super::ProviderClient;

/// On-disk snapshot of provider state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSnapshot {
    pub directories: Vec<DirectoryDetails>,
    pub clients: Vec<ClientApplication>,
    /// MFA configuration keyed by directory id
    pub mfa_configs: HashMap<String, MultiFactorConfig>,
    pub federation_pools: Vec<FederationPoolCandidate>,
    /// Role bindings keyed by federation pool id
    pub role_bindings: HashMap<String, RoleBinding>,
}

/// Provider client that answers from a loaded `ProviderSnapshot`.
pub struct FixtureProvider {
    snapshot: ProviderSnapshot,
}

impl FixtureProvider {
    /// Build a provider from an in-memory snapshot.
    pub fn new(snapshot: ProviderSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot file from disk.
    ///
    /// I/O failures surface as `Transport`, malformed JSON as
    /// `InvalidResponse`, matching how a live backend would classify the
    /// equivalent upstream faults.
    pub fn load(path: &Path) -> Result<Self, ProviderFault> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProviderFault::Transport(format!("cannot read snapshot {}: {}", path.display(), e))
        })?;
        let snapshot: ProviderSnapshot = serde_json::from_str(&content).map_err(|e| {
            ProviderFault::InvalidResponse(format!(
                "malformed snapshot {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::new(snapshot))
    }
}

#[async_trait]
impl ProviderClient for FixtureProvider {
    async fn get_user_directory_details(
        &self,
        directory_id: &str,
    ) -> Result<DirectoryDetails, ProviderFault> {
        self.snapshot
            .directories
            .iter()
            .find(|d| d.id == directory_id)
            .cloned()
            .ok_or_else(|| ProviderFault::NotFound {
                resource: ProviderResource::UserDirectory,
                id: directory_id.to_string(),
            })
    }

    async fn list_client_applications(
        &self,
        directory_id: &str,
    ) -> Result<Vec<ClientApplication>, ProviderFault> {
        Ok(self
            .snapshot
            .clients
            .iter()
            .filter(|c| c.owner_directory_id == directory_id)
            .cloned()
            .collect())
    }

    async fn get_multi_factor_config(
        &self,
        directory_id: &str,
    ) -> Result<MultiFactorConfig, ProviderFault> {
        self.snapshot
            .mfa_configs
            .get(directory_id)
            .copied()
            .ok_or_else(|| ProviderFault::NotFound {
                resource: ProviderResource::UserDirectory,
                id: directory_id.to_string(),
            })
    }

    async fn list_federation_pools(&self) -> Result<Vec<FederationPoolCandidate>, ProviderFault> {
        Ok(self.snapshot.federation_pools.clone())
    }

    async fn get_federation_pool_role_bindings(
        &self,
        pool_id: &str,
    ) -> Result<Option<RoleBinding>, ProviderFault> {
        if !self.snapshot.federation_pools.iter().any(|p| p.id == pool_id) {
            return Err(ProviderFault::NotFound {
                resource: ProviderResource::FederationPool,
                id: pool_id.to_string(),
            });
        }
        Ok(self.snapshot.role_bindings.get(pool_id).cloned())
    }
}
