//! Shared response types for REST API handlers.

use serde::{Deserialize, Serialize};

/// Response for the liveness check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Response for receipt verification.
///
/// A hash mismatch and a receipt lacking `file_hash_sha256` both surface as
/// `valid: false`; the latter additionally reports `receipt_hash: null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub computed_hash: String,
    pub receipt_hash: Option<String>,
}
