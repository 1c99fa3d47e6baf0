//! Handler for the news inspiration feed.

use axum::extract::State;
use axum::Json;
use campaign_news::{NewsFeed, DEFAULT_QUERY};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::state::AppState;

/// Query params for `GET /api/news/`.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// Free-text search; blank or missing falls back to [`DEFAULT_QUERY`].
    pub q: Option<String>,
}

/// GET /api/news/?q=
///
/// Serves the fixed mock feed when no API key is configured, otherwise
/// proxies one search to the news service.
pub async fn inspiration(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<NewsQuery>,
) -> AppResult<Json<NewsFeed>> {
    let Some(client) = state.news.as_deref() else {
        return Ok(Json(NewsFeed::mock()));
    };

    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_QUERY);

    let articles = client.search(query).await?;
    Ok(Json(NewsFeed::live(articles)))
}
