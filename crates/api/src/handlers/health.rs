//! Liveness check.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub pong: bool,
}

/// GET /api/ping/
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { pong: true })
}
