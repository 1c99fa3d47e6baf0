pub mod campaign;
pub mod dashboard;
pub mod health;
pub mod news;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (every path also matches without the trailing slash):
///
/// ```text
/// /campaigns/                  list (?platform=&status=), create
/// /campaigns/choices/          platform and status values with labels (GET)
/// /campaigns/{id}/             get, full update, partial update, delete
///
/// /dashboard/                  aggregated campaign statistics (GET)
///
/// /news/                       news inspiration feed (GET, ?q=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(campaign::router())
        .merge(dashboard::router())
        .merge(news::router())
}
