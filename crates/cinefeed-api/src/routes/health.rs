//! Liveness endpoint for the Cinefeed API.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Crate version baked in at compile time.
    pub version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the health router, merged at the application root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
