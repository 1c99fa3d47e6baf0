use std::sync::Arc;

use campaign_news::{NewsApiError, NewsClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: campaign_db::DbPool,
    /// News search client; `None` when no API key is configured (mock mode).
    pub news: Option<Arc<NewsClient>>,
}

impl AppState {
    /// Assemble state, building the news client only when a key is present.
    pub fn new(pool: campaign_db::DbPool, config: &ServerConfig) -> Result<Self, NewsApiError> {
        let news = match &config.news_api_key {
            Some(key) => Some(Arc::new(NewsClient::new(
                config.news_api_url.clone(),
                key.clone(),
            )?)),
            None => None,
        };

        Ok(Self { pool, news })
    }
}
