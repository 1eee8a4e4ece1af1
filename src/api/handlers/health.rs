//! Liveness handler.

use axum::Json;

use crate::api::types::HealthResponse;

/// GET / - liveness check with a fixed payload.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "mnevi-backend",
    })
}
