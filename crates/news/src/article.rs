//! Article shapes: what the upstream service returns and what we serve.

use serde::{Deserialize, Serialize};

/// Hint returned alongside the mock feed.
pub const MOCK_MESSAGE: &str = "Configure NEWS_API_KEY in .env for live news.";

/// An article as served to clients.
///
/// Upstream fields may be missing; they serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Name of the publishing outlet.
    pub source: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Where a feed's articles came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Mock,
    Live,
}

/// Response body of `GET /api/news/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewsFeed {
    pub status: FeedStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub articles: Vec<Article>,
}

impl NewsFeed {
    /// The fixed four-article feed used when no API key is configured.
    pub fn mock() -> Self {
        Self {
            status: FeedStatus::Mock,
            message: Some(MOCK_MESSAGE),
            articles: mock_articles(),
        }
    }

    pub fn live(articles: Vec<Article>) -> Self {
        Self {
            status: FeedStatus::Live,
            message: None,
            articles,
        }
    }
}

fn mock_article(title: &str, description: &str, source: &str, published_at: &str) -> Article {
    Article {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        url: Some("https://newsapi.org".to_string()),
        source: Some(source.to_string()),
        published_at: Some(published_at.to_string()),
    }
}

fn mock_articles() -> Vec<Article> {
    vec![
        mock_article(
            "How Short-Form Video is Dominating Social Media in 2025",
            "Brands leveraging TikTok and Reels see 3x engagement over static posts.",
            "Marketing Weekly",
            "2025-01-15T10:00:00Z",
        ),
        mock_article(
            "AI-Powered Content Creation Trends for Q2",
            "Marketers are turning to AI tools to scale content production.",
            "Digital Trends",
            "2025-01-14T08:00:00Z",
        ),
        mock_article(
            "Influencer Marketing Spend Hits $24B Globally",
            "Micro-influencers deliver higher ROI than mega influencers for most brands.",
            "Ad Week",
            "2025-01-13T12:00:00Z",
        ),
        mock_article(
            "LinkedIn B2B Campaigns See Record Engagement Rates",
            "Thought leadership content outperforms promotional posts on LinkedIn.",
            "B2B Magazine",
            "2025-01-12T09:00:00Z",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Upstream payload
// ---------------------------------------------------------------------------

/// Body of a successful search response. Only `articles` is read.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub articles: Vec<UpstreamArticle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub source: Option<UpstreamSource>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamSource {
    pub name: Option<String>,
}

impl From<UpstreamArticle> for Article {
    fn from(a: UpstreamArticle) -> Self {
        Self {
            title: a.title,
            description: a.description,
            url: a.url,
            source: a.source.and_then(|s| s.name),
            published_at: a.published_at,
        }
    }
}
