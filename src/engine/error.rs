//! Error taxonomy for import reconciliation.

use thiserror::Error;

use crate::provider::ProviderFault;

/// Stable error kinds, one per taxonomy entry.
///
/// Automation keys off these; the display messages may be reworded, the
/// kinds may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileErrorKind {
    InvalidPayload,
    AlreadyExists,
    AlreadyImported,
    DirectoryNotFound,
    NoPublicClient,
    NoMatchingFederationPool,
    AmbiguousFederationPool,
    NoRoleBinding,
    Provider,
}

impl ReconcileErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileErrorKind::InvalidPayload => "invalid_payload",
            ReconcileErrorKind::AlreadyExists => "already_exists",
            ReconcileErrorKind::AlreadyImported => "already_imported",
            ReconcileErrorKind::DirectoryNotFound => "directory_not_found",
            ReconcileErrorKind::NoPublicClient => "no_public_client",
            ReconcileErrorKind::NoMatchingFederationPool => "no_matching_federation_pool",
            ReconcileErrorKind::AmbiguousFederationPool => "ambiguous_federation_pool",
            ReconcileErrorKind::NoRoleBinding => "no_role_binding",
            ReconcileErrorKind::Provider => "provider_error",
        }
    }
}

impl std::fmt::Display for ReconcileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal errors produced by a reconciliation attempt.
///
/// Every variant carries the offending identifier(s); `hint()` returns a
/// display-ready remediation string. The engine never returns a partial
/// descriptor alongside any of these.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// Request payload is malformed or its version is unsupported.
    #[error("invalid import payload: {reason}")]
    InvalidPayload { reason: String },

    /// The project already holds a resource of this category.
    #[error("an auth resource named '{name}' already exists in this project")]
    AlreadyExists { name: String },

    /// The existing local resource was itself imported; it cannot be
    /// re-imported in place.
    #[error("the auth resource '{name}' has already been imported into this project")]
    AlreadyImported { name: String },

    /// Provider reports the requested user directory does not exist.
    #[error("the configured user directory '{id}' cannot be found")]
    DirectoryNotFound { id: String },

    /// Directory has zero client applications without a shared secret.
    #[error(
        "user directory '{directory_id}' does not have at least one public app client \
         (an app client without a shared secret)"
    )]
    NoPublicClient { directory_id: String },

    /// No federation pool references the directory and discovered clients.
    #[error(
        "no federation pool has user directory '{directory_id}' configured as an \
         identity provider for the discovered app clients"
    )]
    NoMatchingFederationPool { directory_id: String },

    /// More than one pool matches; selection would be a guess.
    #[error(
        "{} federation pools reference user directory '{directory_id}': {}",
        candidates.len(),
        candidates.join(", ")
    )]
    AmbiguousFederationPool {
        directory_id: String,
        /// Ids of every surviving candidate, in provider order
        candidates: Vec<String>,
    },

    /// Matched pool exists but has no role attachment.
    #[error("federation pool '{pool_id}' has no authenticated/unauthenticated roles attached")]
    NoRoleBinding { pool_id: String },

    /// Any other upstream fault, wrapped unchanged.
    #[error("provider request failed: {0}")]
    Provider(#[from] ProviderFault),
}

impl ReconcileError {
    /// Stable kind for this error.
    pub fn kind(&self) -> ReconcileErrorKind {
        match self {
            ReconcileError::InvalidPayload { .. } => ReconcileErrorKind::InvalidPayload,
            ReconcileError::AlreadyExists { .. } => ReconcileErrorKind::AlreadyExists,
            ReconcileError::AlreadyImported { .. } => ReconcileErrorKind::AlreadyImported,
            ReconcileError::DirectoryNotFound { .. } => ReconcileErrorKind::DirectoryNotFound,
            ReconcileError::NoPublicClient { .. } => ReconcileErrorKind::NoPublicClient,
            ReconcileError::NoMatchingFederationPool { .. } => {
                ReconcileErrorKind::NoMatchingFederationPool
            }
            ReconcileError::AmbiguousFederationPool { .. } => {
                ReconcileErrorKind::AmbiguousFederationPool
            }
            ReconcileError::NoRoleBinding { .. } => ReconcileErrorKind::NoRoleBinding,
            ReconcileError::Provider(_) => ReconcileErrorKind::Provider,
        }
    }

    /// Remediation hint suitable for direct display to the operator.
    pub fn hint(&self) -> &'static str {
        match self {
            ReconcileError::InvalidPayload { .. } => {
                "Check the payload against the documented import request schema and \
                 supported version."
            }
            ReconcileError::AlreadyExists { .. } => {
                "Remove the existing auth resource from the project before importing \
                 a different one."
            }
            ReconcileError::AlreadyImported { .. } => {
                "Imported auth cannot be modified in place. Unlink it first, then run \
                 the import again."
            }
            ReconcileError::DirectoryNotFound { .. } => {
                "Verify the directory id and that your credentials target the region \
                 it lives in."
            }
            ReconcileError::NoPublicClient { .. } => {
                "Register an app client without a shared secret on the directory; \
                 public client flows require one."
            }
            ReconcileError::NoMatchingFederationPool { .. } => {
                "Configure a federation pool with the directory as an identity \
                 provider for the app clients, then retry."
            }
            ReconcileError::AmbiguousFederationPool { .. } => {
                "Multiple pools match equally well; the engine will not pick one. \
                 Narrow the provider-side configuration so exactly one pool matches."
            }
            ReconcileError::NoRoleBinding { .. } => {
                "Attach authenticated and unauthenticated roles to the federation \
                 pool, then retry."
            }
            ReconcileError::Provider(_) => {
                "An upstream provider call failed; see the wrapped error for detail."
            }
        }
    }
}
