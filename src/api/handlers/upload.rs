//! Receipt issuance handler.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::api::ApiError;
use crate::domain::{sanitize_filename, Receipt};
use crate::server::AppState;

/// POST /upload - store an uploaded file and issue a proof-of-existence
/// receipt for it.
///
/// Expects a multipart `file` part. The uploaded bytes are persisted under
/// `<uuid>_<sanitized-name>`, the recorded hash is computed over the
/// persisted copy, and the receipt is written as an indented JSON sidecar
/// under `<uuid>_receipt.json` before being returned to the caller.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Receipt>, ApiError> {
    // First `file` part wins; any duplicates are ignored.
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let original_name = field.file_name().unwrap_or_default().to_string();
            upload = Some((original_name, field.bytes().await?));
            break;
        }
    }

    let (original_name, bytes) = upload.ok_or(ApiError::FileMissing)?;
    let file_name = sanitize_filename(&original_name);
    if file_name.is_empty() {
        return Err(ApiError::EmptyFilename);
    }

    // Fresh identifier per upload; UUIDv4 collisions are treated as
    // negligible, so there is no collision handling.
    let uid = Uuid::new_v4();
    let file_key = format!("{uid}_{file_name}");
    state.store.put(&file_key, &bytes).await?;

    // Hash the persisted copy, not the in-memory upload, so the receipt
    // matches exactly what is in storage.
    let file_hash = state.store.digest(&file_key).await?;

    let receipt = Receipt::issue(uid, &file_name, &file_hash);
    let receipt_key = format!("{uid}_receipt.json");
    state
        .store
        .put(&receipt_key, &receipt.to_pretty_json()?)
        .await?;

    info!(
        receipt_id = %receipt.receipt_id,
        file_name = %file_name,
        size = bytes.len(),
        "issued receipt"
    );

    Ok(Json(receipt))
}
