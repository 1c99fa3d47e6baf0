//! The campaign tracker's HTTP surface: `/health` plus the `/api` tree,
//! wrapped in the middleware every route shares.
//!
//! `main.rs` and `tests/common/mod.rs` both call [`build_app_router`], so
//! tests see the production stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request UUID, echoed on every response.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Methods the campaign, dashboard and news routes answer to.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Browsers may cache a preflight answer for this long.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes());

    with_middleware(routes, config).with_state(state)
}

/// Wrap `routes` in the shared stack. Outermost first, a request passes
/// CORS, gets an id, is traced, has its id copied to the response, is
/// bounded by the request timeout, and any handler panic becomes a 500.
fn with_middleware(routes: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    routes
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(trace)
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(cors_layer(&config.cors_origins))
}

/// CORS for the frontend origins in `CORS_ORIGINS`.
///
/// Clients send JSON bodies and no credentials; the request id is exposed so
/// the frontend can quote it in bug reports.
///
/// Panics at startup if an origin is not a valid header value.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([CONTENT_TYPE])
        .expose_headers([REQUEST_ID_HEADER])
        .allow_credentials(false)
        .max_age(PREFLIGHT_MAX_AGE)
}
