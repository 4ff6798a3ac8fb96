//! Uniform response envelope
//!
//! Every API response (success or error) is wrapped in the same
//! envelope carrying a message, an optional payload, a timestamp,
//! and a status discriminator.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Outcome discriminator carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The uniform response wrapper.
///
/// `data` is omitted from the serialized body when absent.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    /// Human-readable outcome message
    pub message: String,
    /// Optional payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Time the response was produced
    pub timestamp: DateTime<Utc>,
    /// Outcome status
    pub status: ResponseStatus,
}

impl Envelope {
    /// Creates a success envelope with no payload.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
            status: ResponseStatus::Success,
        }
    }

    /// Creates an error envelope with no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
            status: ResponseStatus::Error,
        }
    }

    /// Attaches a payload to the envelope.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
