//! Health and readiness snapshots
//!
//! The health endpoint reports liveness only; no downstream
//! dependencies are probed. The readiness snapshot backs the optional
//! `GET /ready` probe.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// API version reported by the health endpoint.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response body for the health endpoint (GET /health).
#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    /// Health status, always "healthy"
    pub status: String,
    /// Current timestamp
    pub timestamp: DateTime<Utc>,
    /// Human-readable uptime since process start
    pub uptime: String,
    /// Whole seconds of uptime, for machine consumption
    pub uptime_seconds: u64,
    /// API version
    pub version: String,
}

impl HealthSnapshot {
    /// Creates a snapshot from the elapsed time since process start.
    pub fn healthy(uptime: Duration) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            uptime: format_uptime(uptime),
            uptime_seconds: uptime.as_secs(),
            version: API_VERSION.to_string(),
        }
    }
}

/// Response body for the readiness probe (GET /ready).
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessSnapshot {
    /// Readiness status, always "ready"
    pub status: String,
    /// Current timestamp
    pub timestamp: DateTime<Utc>,
}

impl ReadinessSnapshot {
    /// Creates a ready snapshot with the current timestamp.
    pub fn ready() -> Self {
        Self {
            status: "ready".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Formats a duration as `1h2m3s` / `2m3s` / `3s`.
fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
