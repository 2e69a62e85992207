//! Final resource descriptor assembly.

use serde::{Deserialize, Serialize};

use crate::provider::{
    DirectoryDetails, FederationPoolCandidate, MultiFactorConfig, MultiFactorMode, RoleBinding,
};

use super::classify::ClassifiedClients;

/// The reconciled, provider-confirmed description of the imported auth
/// backend.
///
/// Every field originates from provider responses; nothing is echoed from
/// the caller's request. Constructed once per successful attempt and handed
/// to the caller for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub user_directory_id: String,
    pub multi_factor: MultiFactorMode,
    pub totp_enabled: bool,
    /// Discovered-and-classified public client, not the requested one
    pub public_client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidential_client_id: Option<String>,
    pub federation_pool_id: String,
    pub federation_pool_name: String,
    pub allows_unauthenticated: bool,
    pub role_binding: RoleBinding,
}

/// Combine the validated facts of a completed reconciliation.
///
/// Pure, no I/O. Taking every input owned and fully populated means there is
/// no representable incomplete state; a caller cannot reach this with a
/// missing step.
pub fn build_descriptor(
    directory: DirectoryDetails,
    mfa: MultiFactorConfig,
    clients: ClassifiedClients,
    pool: FederationPoolCandidate,
    role_binding: RoleBinding,
) -> ResourceDescriptor {
    ResourceDescriptor {
        user_directory_id: directory.id,
        multi_factor: mfa.mode,
        totp_enabled: mfa.totp_enabled,
        public_client_id: clients.public.client_id,
        confidential_client_id: clients.confidential.map(|c| c.client_id),
        federation_pool_id: pool.id,
        federation_pool_name: pool.name,
        allows_unauthenticated: pool.allows_unauthenticated,
        role_binding,
    }
}
