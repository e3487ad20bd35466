//! HTTP request handlers.

use axum::{
    Json,
    body::Body,
    extract::{Extension, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::Response,
};
use owo_colors::OwoColorize;
use std::{io::ErrorKind, sync::Arc, time::Instant};
use tokio::fs;
use tracing::info;

use crate::colors::request_tag;
use crate::config::ApiConfig;
use crate::state::AppState;

/// Returns the captured API configuration as JSON
///
/// Cannot fail: absent secrets were captured as empty strings at startup, so
/// the response simply carries empty values and false flags.
pub async fn api_config(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<String>,
    Extension(start_time): Extension<Instant>,
) -> Json<ApiConfig> {
    let config = state.api_config.clone();

    let latency = start_time.elapsed();
    info!(
        "{} ← {} {} ({}ms)",
        request_tag(&id),
        "CONFIG".yellow(),
        StatusCode::OK,
        latency.as_millis()
    );
    Json(config)
}

/// Handles static file requests with proper content-type detection and logging
///
/// Implements several key behaviors:
/// - Automatic index.html serving for directory requests
/// - Correct MIME type detection using file extension
/// - 403 for unreadable files, 404 for everything else
/// - Color-coded logging with consistent request IDs
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<String>,
    Extension(start_time): Extension<Instant>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let path = uri.path().trim_start_matches('/');
    let mut file_path = state.static_dir.join(path);

    if file_path.is_dir() {
        file_path.push("index.html");
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
            let mut response = Response::new(Body::from(content));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_str(mime_type.as_ref()).unwrap(),
            );

            let latency = start_time.elapsed();
            info!(
                "{} ← {} {} ({}ms)",
                request_tag(&id),
                "STATIC".green(),
                response.status(),
                latency.as_millis()
            );
            Ok(response)
        }
        Err(e) => {
            let status = match e.kind() {
                ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
                _ => StatusCode::NOT_FOUND,
            };

            let latency = start_time.elapsed();
            info!(
                "{} ← {} {} ({}ms)",
                request_tag(&id),
                "STATIC".green(),
                status,
                latency.as_millis()
            );
            Err(status)
        }
    }
}
