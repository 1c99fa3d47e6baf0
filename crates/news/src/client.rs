//! HTTP client for the news search service.

use std::time::Duration;

use crate::article::{Article, SearchResponse};

/// Upper bound on a single search request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of articles requested per search.
pub const PAGE_SIZE: u32 = 6;

/// Errors from the news search service.
#[derive(Debug, thiserror::Error)]
pub enum NewsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("News API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// Client bound to one endpoint and API key.
pub struct NewsClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl NewsClient {
    /// Build a client with a [`REQUEST_TIMEOUT`] timeout.
    ///
    /// * `api_url` - Search endpoint, e.g. `https://newsapi.org/v2/everything`.
    pub fn new(api_url: String, api_key: String) -> Result<Self, NewsApiError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Search English-language articles for `query`, newest first, at most
    /// [`PAGE_SIZE`] results.
    pub async fn search(&self, query: &str) -> Result<Vec<Article>, NewsApiError> {
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(strip_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(NewsApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SearchResponse = response.json().await.map_err(strip_url)?;
        tracing::debug!(query, count = payload.articles.len(), "News search completed");
        Ok(payload.articles.into_iter().map(Article::from).collect())
    }
}

/// The request URL carries the API key in its query string; keep it out of
/// error messages.
fn strip_url(err: reqwest::Error) -> NewsApiError {
    NewsApiError::Request(err.without_url())
}
