//! Extractors whose rejections render as [`AppError`] JSON bodies instead of
//! Axum's plain-text defaults.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// `axum::Json` with JSON error responses on malformed bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose parse failures are JSON 404s: an id that is
/// not an integer cannot name a campaign.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);

/// `axum::extract::Query` with JSON error responses on malformed query strings.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
