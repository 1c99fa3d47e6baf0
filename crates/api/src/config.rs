/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables (or a `.env` file).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// News search API key. `None` (unset or blank) selects the mock feed.
    pub news_api_key: Option<String>,
    /// News search endpoint.
    pub news_api_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `8000`                                |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `NEWS_API_KEY`         | unset                                 |
    /// | `NEWS_API_URL`         | `https://newsapi.org/v2/everything`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let news_api_key = non_blank(std::env::var("NEWS_API_KEY").ok());

        let news_api_url = std::env::var("NEWS_API_URL")
            .unwrap_or_else(|_| campaign_news::DEFAULT_API_URL.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            news_api_key,
            news_api_url,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// An empty or whitespace-only key counts as unconfigured.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
