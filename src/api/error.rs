//! API error responses.
//!
//! Every error renders as a flat `{"error": "<message>"}` JSON body with
//! the appropriate HTTP status. Client mistakes (missing multipart parts,
//! empty filename) map to 400; storage failures and unparseable receipt
//! documents are request-fatal and map to 500.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::infra::StoreError;

/// Errors surfaced by the REST handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload request had no `file` part
    #[error("file missing")]
    FileMissing,

    /// Upload part carried an empty (or entirely unsafe) file name
    #[error("empty filename")]
    EmptyFilename,

    /// Verify request lacked the `file` or the `receipt` part
    #[error("file and receipt required")]
    FileAndReceiptRequired,

    /// Multipart decoding failed; keeps the framework's status (including
    /// the built-in body-size rejection)
    #[error("{1}")]
    Multipart(StatusCode, String),

    /// Receipt document was not valid JSON
    #[error("invalid receipt json: {0}")]
    ReceiptJson(#[from] serde_json::Error),

    /// Blob storage failure
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FileMissing | ApiError::EmptyFilename | ApiError::FileAndReceiptRequired => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Multipart(status, _) => *status,
            ApiError::ReceiptJson(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart(err.status(), err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
