//! News inspiration feed.
//!
//! Wraps the third-party news search API behind [`NewsClient`] and provides
//! the fixed [`NewsFeed::mock`] feed served when no API key is configured.

pub mod article;
pub mod client;

pub use article::{Article, FeedStatus, NewsFeed};
pub use client::{NewsApiError, NewsClient};

/// Query used when the caller does not supply one.
pub const DEFAULT_QUERY: &str = "social media marketing";

/// Default endpoint of the news search service.
pub const DEFAULT_API_URL: &str = "https://newsapi.org/v2/everything";
