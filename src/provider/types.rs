use serde::{Deserialize, Serialize};

/// Multi-factor authentication mode reported by the provider for a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MultiFactorMode {
    /// MFA is disabled for the directory
    #[default]
    Off,
    /// Users may opt in to MFA
    Optional,
    /// MFA is enforced for every sign-in
    Required,
}

/// User directory details as confirmed by the provider.
///
/// The id here is the provider's answer, not the caller's input; it is what
/// ends up in the final descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryDetails {
    pub id: String,
    pub multi_factor: MultiFactorMode,
}

/// Directory-level MFA configuration from the dedicated config endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiFactorConfig {
    pub mode: MultiFactorMode,
    /// Whether software-token (TOTP) MFA is enabled for the directory
    pub totp_enabled: bool,
}

/// An application registration attached to a user directory.
///
/// Registrations with a shared secret are "confidential" clients (server-side
/// flows); registrations without one are "public" clients (browser/native).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientApplication {
    pub owner_directory_id: String,
    pub client_id: String,
    pub has_shared_secret: bool,
}

/// One identity-provider entry configured on a federation pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProviderRef {
    /// Provider name; carries the owning directory id as an embedded token
    pub provider_name: String,
    pub client_id: String,
}

/// A federation pool as listed by the provider, before matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationPoolCandidate {
    pub id: String,
    pub name: String,
    pub allows_unauthenticated: bool,
    /// Provider order is preserved; entries are never reordered
    pub identity_providers: Vec<IdentityProviderRef>,
}

/// The role pair a federation pool grants to authenticated and
/// unauthenticated sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBinding {
    pub authenticated_role_arn: String,
    pub authenticated_role_name: String,
    pub unauthenticated_role_arn: String,
    pub unauthenticated_role_name: String,
}
