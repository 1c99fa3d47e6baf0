//! Route definitions for the dashboard statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// ```text
/// GET /dashboard/    -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard/", get(dashboard::stats))
        .route("/dashboard", get(dashboard::stats))
}
