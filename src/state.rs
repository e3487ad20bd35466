//! Shared application state.

use std::path::PathBuf;

use crate::config::ApiConfig;

/// Shared application state accessible to all handlers
///
/// The two environment-derived secrets are captured here once at construction,
/// so handlers never touch process-wide environment state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Root directory for static file serving
    pub static_dir: PathBuf,
    /// Config exposed on `/api/config`
    pub api_config: ApiConfig,
}
