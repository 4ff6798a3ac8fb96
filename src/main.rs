//! Backend API - a minimal demonstration HTTP API
//!
//! Serves health checks, a welcome message, an echo endpoint, and an
//! in-memory record store over JSON.

use std::net::SocketAddr;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend_api::{api::create_router, AppState, Config};

/// Main entry point for the API server.
///
/// # Startup Sequence
/// 1. Load an optional `.env` file
/// 2. Load configuration from environment variables
/// 3. Initialize tracing subscriber for logging
/// 4. Create application state with an empty record store
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may set PORT, APP_MODE, or RUST_LOG, so load it first
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = Config::from_env();

    // Default filter depends on mode, can be overridden with RUST_LOG
    let default_filter = if config.release_mode {
        "backend_api=info,tower_http=warn"
    } else {
        "backend_api=debug,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting backend API server");
    if !dotenv_loaded {
        info!("No .env file found, using system environment variables");
    }
    info!(
        "Configuration loaded: port={}, release_mode={}, readiness={}, static_dir={:?}",
        config.server_port, config.release_mode, config.enable_readiness, config.static_dir
    );

    // Create application state with the record store
    let state = AppState::new();
    info!("Record store initialized");

    // Create router with all endpoints
    let app = create_router(state, &config);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
