use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"healthy"`; storage failures return 500 instead.
    pub status: &'static str,
    pub testimonial_count: i64,
    /// Active storage backend (`postgres` or `memory`).
    pub storage: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET /health -- proves the storage backend answers a count query.
async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let testimonial_count = state.store.count_testimonials().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        testimonial_count,
        storage: state.store.backend_name(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    }))
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
