//! API Routes
//!
//! Configures the Axum router with all API endpoints. The core route
//! set is mounted at the root and again under `/api/v1`; the readiness
//! probe and static file serving are optional registrations driven by
//! configuration.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use super::cors::apply_cors;
use super::handlers::{
    create_data_handler, echo_handler, get_data_handler, health_handler, readiness_handler,
    welcome_handler, AppState,
};
use crate::config::Config;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Cross-origin policy on every response, `OPTIONS` answered with 204
/// - Tracing: logs all requests
/// - Panic recovery: handler panics surface as 500 responses
pub fn create_router(state: AppState, config: &Config) -> Router {
    let mut app = Router::new()
        .merge(api_routes())
        .nest("/api/v1", api_routes());

    if config.enable_readiness {
        app = app.route("/ready", get(readiness_handler));
    }

    if let Some(dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(middleware::from_fn(apply_cors))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

/// The core route set, mounted once at the root and once under the
/// versioned prefix.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .route("/echo/:message", get(echo_handler))
        .route("/data", post(create_data_handler).get(get_data_handler))
}
