//! Proof-of-existence receipts.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Protocol version carried in every receipt.
pub const MNEVI_VERSION: &str = "1.0";

/// Digest algorithm recorded in receipts.
pub const ALGORITHM: &str = "SHA-256";

/// Proof type recorded in receipts.
pub const PROOF_TYPE: &str = "existence";

/// Network identifier: local timestamping only, no on-chain anchoring.
pub const NETWORK: &str = "offchain-mvp";

/// Issuer identity recorded in receipts.
pub const ISSUER: &str = "mnevi.app";

/// A receipt asserting that a file with a given content hash existed at a
/// given time.
///
/// Receipts are created once at upload time, persisted as an indented JSON
/// sidecar, and never mutated. Invariant: `file_hash_sha256` is the SHA-256
/// of the exact bytes stored under the receipt's file key at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub mnevi_version: String,
    /// Globally unique identifier, `mnevi-<uuid>`.
    pub receipt_id: String,
    /// Sanitized original file name (no path separators, no traversal).
    pub file_name: String,
    /// Lowercase hex SHA-256 digest, 64 characters.
    pub file_hash_sha256: String,
    /// ISO-8601 UTC timestamp with trailing `Z`, captured at issuance.
    pub timestamp_utc: String,
    pub algorithm: String,
    pub proof_type: String,
    pub network: String,
    pub issuer: String,
}

impl Receipt {
    /// Issue a new receipt for a stored file, timestamped now.
    pub fn issue(uid: Uuid, file_name: &str, file_hash: &str) -> Self {
        Self {
            mnevi_version: MNEVI_VERSION.to_string(),
            receipt_id: format!("mnevi-{uid}"),
            file_name: file_name.to_string(),
            file_hash_sha256: file_hash.to_string(),
            timestamp_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            algorithm: ALGORITHM.to_string(),
            proof_type: PROOF_TYPE.to_string(),
            network: NETWORK.to_string(),
            issuer: ISSUER.to_string(),
        }
    }

    /// Serialize as 2-space-indented UTF-8 JSON for the sidecar file.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }
}
