//! Error types for the API server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::Envelope;

// == API Error Enum ==
/// Unified error type for the API server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body could not be parsed as a JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        (status, Json(Envelope::error(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API server.
pub type Result<T> = std::result::Result<T, ApiError>;
