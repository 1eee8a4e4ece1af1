//! REST API endpoints for Mnevi Backend.

use axum::routing::{get, post};
use axum::Router;

use crate::api::handlers::{health, upload_file, verify_file};
use crate::server::AppState;

/// Build the service router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/upload", post(upload_file))
        .route("/verify", post(verify_file))
}
