//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;
use owo_colors::OwoColorize;
use std::time::Instant;
use tracing::info;

use crate::app::CONFIG_PATH;
use crate::colors::request_tag;

/// Middleware that logs incoming requests and assigns them unique colored IDs
///
/// This middleware:
/// 1. Generates a short nanoid for each request
/// 2. Records the start time for latency calculation
/// 3. Logs the arrival with a colored ID and the branch it will take
/// 4. Stores the ID and start time in request extensions for downstream handlers
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let method = req.method().clone();
    let uri = req.uri().clone();

    req.extensions_mut().insert(id.clone());
    req.extensions_mut().insert(Instant::now());

    // Tag the arrival with the branch it routes to, matching the completion logs
    let branch = if uri.path() == CONFIG_PATH {
        "CONFIG".yellow().to_string()
    } else {
        "STATIC".green().to_string()
    };
    info!("{} → {} {} {}", request_tag(&id), branch, method, uri.path());
    next.run(req).await
}
