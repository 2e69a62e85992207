//! Import request payload parsing and validation.

use serde::{Deserialize, Serialize};

use super::error::ReconcileError;

/// Import request schema version this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Caller-supplied identifier set for the resources to import.
///
/// Parsed once per attempt and treated as immutable afterwards. Nothing from
/// this struct reaches the output descriptor directly; every descriptor field
/// is provider-confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportRequest {
    pub version: u32,
    pub user_directory_id: String,
    pub federation_pool_id: String,
    /// Preferred public client, if the caller knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_client_id: Option<String>,
    /// Preferred confidential client, if the caller knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidential_client_id: Option<String>,
}

impl ImportRequest {
    /// Parse and validate a JSON payload.
    ///
    /// Fails with `InvalidPayload` before any provider call is made.
    pub fn from_json(payload: &str) -> Result<Self, ReconcileError> {
        let request: Self =
            serde_json::from_str(payload).map_err(|e| ReconcileError::InvalidPayload {
                reason: e.to_string(),
            })?;
        request.validate()?;
        Ok(request)
    }

    /// Validate invariants the type system cannot express.
    pub fn validate(&self) -> Result<(), ReconcileError> {
        if self.version != SUPPORTED_VERSION {
            return Err(ReconcileError::InvalidPayload {
                reason: format!(
                    "unsupported payload version {} (supported: {})",
                    self.version, SUPPORTED_VERSION
                ),
            });
        }
        if self.user_directory_id.is_empty() {
            return Err(ReconcileError::InvalidPayload {
                reason: "user_directory_id must not be empty".to_string(),
            });
        }
        if self.federation_pool_id.is_empty() {
            return Err(ReconcileError::InvalidPayload {
                reason: "federation_pool_id must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
