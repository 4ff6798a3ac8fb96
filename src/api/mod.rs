//! API Module
//!
//! HTTP handlers, routing, and the cross-origin policy for the API.
//!
//! # Endpoints
//! - `GET /health` - Health check
//! - `GET /` - Welcome message with endpoint listing
//! - `GET /echo/:message` - Echo a message
//! - `POST /data` - Create a record
//! - `GET /data` - List all records
//!
//! The same route set is also mounted under `/api/v1`. A readiness
//! probe and static file serving can be enabled via configuration.

pub mod cors;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
