use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Health-check response body: `{"ok": true}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub ok: bool,
}

/// `GET /health`
///
/// Liveness only; the service has no dependencies to check.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { ok: true }))
}
