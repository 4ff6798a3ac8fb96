//! API Handlers
//!
//! HTTP request handlers for each API endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};
use crate::models::{Envelope, HealthSnapshot, ReadinessSnapshot};
use crate::store::{Record, RecordStore};

/// Application state shared across all handlers.
///
/// The record store is wrapped in Arc<RwLock<>> for thread-safe access;
/// the start instant backs the health endpoint's uptime.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe record store
    pub store: Arc<RwLock<RecordStore>>,
    /// Process start time
    pub started_at: Instant,
}

impl AppState {
    /// Creates a fresh AppState with an empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(RecordStore::new())),
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for GET /health
///
/// Reports liveness only; no downstream dependencies are probed, so the
/// status is always "healthy".
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthSnapshot> {
    Json(HealthSnapshot::healthy(state.started_at.elapsed()))
}

/// Handler for GET /ready
///
/// Registered only when the readiness probe is enabled in config.
pub async fn readiness_handler() -> Json<ReadinessSnapshot> {
    Json(ReadinessSnapshot::ready())
}

/// Handler for GET /
///
/// Returns a welcome envelope listing the available endpoints.
pub async fn welcome_handler() -> Json<Envelope> {
    Json(Envelope::success("Welcome to the API!").with_data(json!({
        "endpoints": [
            "GET /health - Health check",
            "GET / - Welcome message",
            "GET /echo/:message - Echo a message",
            "POST /data - Create a record",
            "GET /data - List all records",
        ],
    })))
}

/// Handler for GET /echo/:message
///
/// Returns the path segment literally together with its character count.
pub async fn echo_handler(Path(message): Path<String>) -> Json<Envelope> {
    let length = message.chars().count();

    Json(
        Envelope::success("Message echoed successfully").with_data(json!({
            "echo": message,
            "length": length,
        })),
    )
}

/// Handler for POST /data
///
/// Parses the body as a JSON object, stores it under a generated
/// identifier, and echoes the identifier and payload back with 201.
/// A body that is not a JSON object yields a 400 error envelope.
pub async fn create_data_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<Record>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope>)> {
    let Json(record) =
        body.map_err(|_| ApiError::InvalidBody("Invalid JSON data".to_string()))?;

    let mut store = state.store.write().await;
    let id = store.insert(record.clone());

    Ok((
        StatusCode::CREATED,
        Json(
            Envelope::success("Data created successfully").with_data(json!({
                "id": id,
                "data": record,
            })),
        ),
    ))
}

/// Handler for GET /data
///
/// Returns the entire store contents; no pagination or filtering.
pub async fn get_data_handler(State(state): State<AppState>) -> Json<Envelope> {
    let store = state.store.read().await;

    Json(Envelope::success("Data retrieved successfully").with_data(store.snapshot()))
}
