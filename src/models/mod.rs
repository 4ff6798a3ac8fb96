//! Response models for the API server
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies. Requests carry raw JSON objects,
//! so there are no request DTOs.

pub mod envelope;
pub mod health;

// Re-export commonly used types
pub use envelope::{Envelope, ResponseStatus};
pub use health::{HealthSnapshot, ReadinessSnapshot};
