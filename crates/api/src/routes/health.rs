use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `live` when a news API key is configured, otherwise `mock`.
    pub news_mode: &'static str,
}

/// GET /health -- returns service, database and news-feed health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = campaign_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        news_mode: if state.news.is_some() { "live" } else { "mock" },
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
