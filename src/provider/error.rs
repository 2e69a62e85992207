//! Error types for provider facade operations.

use thiserror::Error;

/// Provider resource categories, used to qualify not-found faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderResource {
    UserDirectory,
    ClientApplication,
    FederationPool,
}

impl std::fmt::Display for ProviderResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderResource::UserDirectory => write!(f, "user directory"),
            ProviderResource::ClientApplication => write!(f, "client application"),
            ProviderResource::FederationPool => write!(f, "federation pool"),
        }
    }
}

/// Faults surfaced by a `ProviderClient` implementation.
///
/// `NotFound` must be distinguishable from every other fault: the engine maps
/// it to a precise error carrying the offending id, while the rest are
/// wrapped opaquely.
#[derive(Error, Debug)]
pub enum ProviderFault {
    /// The targeted resource does not exist upstream.
    #[error("{resource} not found: {id}")]
    NotFound {
        resource: ProviderResource,
        id: String,
    },

    /// The caller's credentials cannot read the targeted resource.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Connectivity or I/O failure reaching the provider.
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream response did not match the expected shape.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// Backend construction or configuration error.
    #[error("provider configuration error: {0}")]
    Configuration(String),
}

impl ProviderFault {
    /// True when the fault is a not-found condition for the given resource.
    pub fn is_not_found(&self, wanted: ProviderResource) -> bool {
        matches!(self, ProviderFault::NotFound { resource, .. } if *resource == wanted)
    }
}
