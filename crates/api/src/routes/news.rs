//! Route definitions for the news inspiration feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// ```text
/// GET /news/?q=    -> inspiration
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/news/", get(news::inspiration))
        .route("/news", get(news::inspiration))
}
