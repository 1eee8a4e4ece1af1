//! Receipt verification handler.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::api::types::VerifyResponse;
use crate::api::ApiError;
use crate::domain::sanitize_filename;
use crate::server::AppState;

/// POST /verify - check an uploaded file against a previously issued
/// receipt.
///
/// Expects multipart `file` and `receipt` parts; the receipt is a JSON
/// document uploaded as a file part, not a lookup key. The file is written
/// to a per-request unique scratch key and its SHA-256 is recomputed over
/// the persisted copy, then compared to the receipt's `file_hash_sha256`.
/// A receipt without that field verifies as `valid: false` with a null
/// `receipt_hash`. The scratch blob is not cleaned up.
pub async fn verify_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<VerifyResponse>, ApiError> {
    // First part of each name wins; any duplicates are ignored.
    let mut file = None;
    let mut receipt_doc = None;
    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") if file.is_none() => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                file = Some((original_name, field.bytes().await?));
            }
            Some("receipt") if receipt_doc.is_none() => {
                receipt_doc = Some(field.bytes().await?);
            }
            _ => {}
        }
        if file.is_some() && receipt_doc.is_some() {
            break;
        }
    }

    let ((original_name, bytes), receipt_bytes) = file
        .zip(receipt_doc)
        .ok_or(ApiError::FileAndReceiptRequired)?;

    // Unique scratch key per request: concurrent verifies of files with
    // the same name must not overwrite each other mid-read.
    let scratch_key = format!("verify_{}_{}", Uuid::new_v4(), sanitize_filename(&original_name));
    state.store.put(&scratch_key, &bytes).await?;
    let computed_hash = state.store.digest(&scratch_key).await?;

    let receipt: serde_json::Value = serde_json::from_slice(&receipt_bytes)?;
    let receipt_hash = receipt
        .get("file_hash_sha256")
        .and_then(|v| v.as_str())
        .map(str::to_owned);

    let valid = receipt_hash.as_deref() == Some(computed_hash.as_str());

    info!(valid, computed_hash = %computed_hash, "verified file against receipt");

    Ok(Json(VerifyResponse {
        valid,
        computed_hash,
        receipt_hash,
    }))
}
