use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The rate limiter lives here rather than in module-global
/// state so it is created at startup and dropped on shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: assets_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Per-client request counters for rate limiting.
    pub rate_limiter: Arc<RateLimiter>,
}
