//! Assets service API library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! middleware) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;

/// Service name reported by the health endpoint and log lines.
pub const SERVICE_NAME: &str = "assets-service";
