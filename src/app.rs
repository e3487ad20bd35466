//! Router assembly.

use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers::{api_config, serve_static};
use crate::middleware::log_requests;
use crate::state::AppState;

/// The one reserved path; everything else falls through to static serving
pub const CONFIG_PATH: &str = "/api/config";

/// Builds the full application router
///
/// Two branches only: the exact-path config endpoint and a static-file
/// fallback. The three no-cache layers sit outside both branches, so every
/// response, including 404s from the static path, carries each header exactly
/// once.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(CONFIG_PATH, get(api_config))
        .fallback(get(serve_static))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
