//! Backend API - a minimal demonstration HTTP API
//!
//! Provides health checks, a welcome message, an echo endpoint, and an
//! in-memory record store exposed over JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
