//! Static web server for the Bitcoin mining simulator frontend.
//!
//! Serves the simulator's files from the directory next to the executable and
//! exposes `/api/config`, which hands the two API secrets to the frontend.
//! Every response carries no-cache headers so browsers always refetch.

use miner_local::{app::router, cli::Cli, config::ApiConfig, listener, state::AppState};
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tracing::{Level, info};

#[tokio::main]
async fn main() {
    // Initialize structured logging with INFO level as default
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();
    let root = args.root.unwrap_or_else(exe_dir);
    let static_dir = root
        .canonicalize()
        .expect("Failed to canonicalize document root");

    // Secrets are captured once here; handlers never read the environment
    let state = Arc::new(AppState {
        static_dir: static_dir.clone(),
        api_config: ApiConfig::from_env(),
    });

    let app = router(state);
    let listener = listener::bind_reusable(args.bind).expect("Failed to bind server address");

    info!("Serving simulator files from: {:?}", static_dir);
    info!("Bitcoin Mining Simulator running at http://{}", args.bind);
    info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server stopped.");
}

/// Default document root: the directory containing the executable
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .expect("Failed to locate executable directory")
}

/// Resolves when the process receives Ctrl+C or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
