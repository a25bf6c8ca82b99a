use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::SERVICE_NAME;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Service identifier for monitoring.
    pub service: &'static str,
}

/// GET /health -- unauthenticated liveness probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Mount health check routes (intended for root-level, NOT under
/// `/api/assets`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
