//! Integration tests for `GET /api/news/`.
//!
//! Live mode is exercised against a local Axum stub standing in for the
//! news search service, bound to an ephemeral port.

mod common;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get as get_route;
use axum::{Json, Router};
use common::{body_json, get};
use serde_json::{json, Value};
use sqlx::PgPool;

type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Start a stub search endpoint that records query params and answers with
/// `status` / `body`. Returns its URL and the captured params.
async fn spawn_stub(status: StatusCode, body: Value) -> (String, Captured) {
    let captured: Captured = Arc::default();

    let app = Router::new()
        .route(
            "/v2/everything",
            get_route(
                move |State(captured): State<Captured>,
                      Query(params): Query<HashMap<String, String>>| {
                    let body = body.clone();
                    async move {
                        captured.lock().unwrap().push(params);
                        (status, Json(body))
                    }
                },
            ),
        )
        .with_state(Arc::clone(&captured));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v2/everything"), captured)
}

fn live_app(pool: PgPool, api_url: String) -> Router {
    let mut config = common::test_config();
    config.news_api_key = Some("test-key".to_string());
    config.news_api_url = api_url;
    common::build_test_app_with(pool, config)
}

// ---------------------------------------------------------------------------
// Mock mode
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn without_key_returns_fixed_mock_feed(pool: PgPool) {
    let mut bodies = Vec::new();
    for uri in ["/api/news/", "/api/news/?q=tiktok", "/api/news?q=anything%20else"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(body_json(response).await);
    }

    let json = &bodies[0];
    assert_eq!(json["status"], "mock");
    assert_eq!(json["message"], "Configure NEWS_API_KEY in .env for live news.");
    let articles = json["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 4);
    assert_eq!(
        articles[0]["title"],
        "How Short-Form Video is Dominating Social Media in 2025"
    );
    for article in articles {
        for key in ["title", "description", "url", "source", "publishedAt"] {
            assert!(article[key].is_string(), "{key} missing from mock article");
        }
    }

    // The query string has no effect on the mock feed.
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0], bodies[2]);
}

// ---------------------------------------------------------------------------
// Live mode
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn with_key_proxies_and_reshapes_articles(pool: PgPool) {
    let (url, captured) = spawn_stub(
        StatusCode::OK,
        json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": "wired", "name": "Wired"},
                "author": "A. Writer",
                "title": "Reels vs Shorts",
                "description": "Which format wins?",
                "url": "https://example.com/reels",
                "urlToImage": "https://example.com/img.png",
                "publishedAt": "2025-03-02T10:00:00Z",
                "content": "Body"
            }]
        }),
    )
    .await;

    let app = live_app(pool, url);
    let response = get(app, "/api/news/?q=short%20video").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "status": "live",
            "articles": [{
                "title": "Reels vs Shorts",
                "description": "Which format wins?",
                "url": "https://example.com/reels",
                "source": "Wired",
                "publishedAt": "2025-03-02T10:00:00Z"
            }]
        })
    );

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let params = &requests[0];
    assert_eq!(params["q"], "short video");
    assert_eq!(params["language"], "en");
    assert_eq!(params["sortBy"], "publishedAt");
    assert_eq!(params["pageSize"], "6");
    assert_eq!(params["apiKey"], "test-key");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn with_key_uses_default_query(pool: PgPool) {
    let (url, captured) = spawn_stub(StatusCode::OK, json!({"status": "ok", "articles": []})).await;

    let app = live_app(pool, url);
    let json = body_json(get(app, "/api/news/").await).await;
    assert_eq!(json, json!({"status": "live", "articles": []}));

    assert_eq!(captured.lock().unwrap()[0]["q"], "social media marketing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upstream_error_status_returns_502(pool: PgPool) {
    let (url, _) = spawn_stub(
        StatusCode::UNAUTHORIZED,
        json!({"status": "error", "code": "apiKeyInvalid"}),
    )
    .await;

    let app = live_app(pool, url);
    let response = get(app, "/api/news/?q=x").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_GATEWAY");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("401"), "unexpected message: {message}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unreachable_upstream_returns_502_without_leaking_key(pool: PgPool) {
    // Bind then drop a listener to get a port nothing is serving on.
    let addr: SocketAddr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let app = live_app(pool, format!("http://{addr}/v2/everything"));
    let response = get(app, "/api/news/").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(!message.contains("test-key"));
}
