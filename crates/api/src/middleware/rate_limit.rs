//! Per-client request rate limiting.
//!
//! Counters are in-process, keyed by client address, and pruned to a
//! trailing 60-second window on each request. Every response carries
//! `X-RateLimit-Limit`, `X-RateLimit-Remaining`, and `X-RateLimit-Reset`
//! headers; over-quota requests are rejected with 429 before reaching any
//! handler.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

/// Length of the trailing request window.
const WINDOW: Duration = Duration::from_secs(60);

/// Outcome of recording one request against a client's counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request admitted; `remaining` is the quota left in the window.
    Allowed { remaining: usize },
    /// Quota exhausted; the request must be rejected.
    Rejected,
}

/// In-process sliding-window rate limiter.
///
/// Owned by [`AppState`]; created at startup and dropped on shutdown, with
/// no module-global state.
pub struct RateLimiter {
    requests_per_minute: usize,
    counts: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(requests_per_minute: usize) -> Self {
        Self {
            requests_per_minute,
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// The configured per-minute quota.
    pub fn limit(&self) -> usize {
        self.requests_per_minute
    }

    /// Number of clients with at least one timestamp still in the window.
    pub fn tracked_clients(&self) -> usize {
        self.counts.lock().expect("rate limiter lock poisoned").len()
    }

    /// Record a request from `client` at time `now`, pruning timestamps
    /// older than the window first.
    pub fn check(&self, client: &str, now: Instant) -> RateLimitDecision {
        let mut counts = self.counts.lock().expect("rate limiter lock poisoned");

        // Prune every client and evict the ones that have gone idle, so
        // the map only ever holds clients seen within the last window.
        counts.retain(|_, timestamps| {
            timestamps.retain(|t| now.duration_since(*t) < WINDOW);
            !timestamps.is_empty()
        });

        let timestamps = counts.entry(client.to_string()).or_default();

        if timestamps.len() >= self.requests_per_minute {
            return RateLimitDecision::Rejected;
        }

        timestamps.push(now);
        RateLimitDecision::Allowed {
            remaining: self.requests_per_minute - timestamps.len(),
        }
    }
}

/// Axum middleware enforcing the per-client quota.
///
/// The client key is the peer address when the server is run with connect
/// info; requests without one (e.g. in-process test calls) share a single
/// bucket.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let limit = state.rate_limiter.limit();
    let reset_at = chrono::Utc::now().timestamp() + WINDOW.as_secs() as i64;

    let remaining = match state.rate_limiter.check(&client, Instant::now()) {
        RateLimitDecision::Allowed { remaining } => remaining,
        RateLimitDecision::Rejected => {
            tracing::warn!(client = %client, "Rate limit exceeded");
            return AppError::RateLimited { reset_at }.into_response();
        }
    };

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert("X-RateLimit-Limit", int_header(limit as i64));
    headers.insert("X-RateLimit-Remaining", int_header(remaining as i64));
    headers.insert("X-RateLimit-Reset", int_header(reset_at));

    response
}

fn int_header(value: i64) -> HeaderValue {
    // Decimal integers are always valid header values.
    HeaderValue::from_str(&value.to_string()).expect("integer header value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_quota() {
        let limiter = RateLimiter::new(3);
        let now = Instant::now();

        assert_eq!(
            limiter.check("10.0.0.1", now),
            RateLimitDecision::Allowed { remaining: 2 }
        );
        assert_eq!(
            limiter.check("10.0.0.1", now),
            RateLimitDecision::Allowed { remaining: 1 }
        );
        assert_eq!(
            limiter.check("10.0.0.1", now),
            RateLimitDecision::Allowed { remaining: 0 }
        );
        assert_eq!(limiter.check("10.0.0.1", now), RateLimitDecision::Rejected);
    }

    #[test]
    fn clients_are_counted_independently() {
        let limiter = RateLimiter::new(1);
        let now = Instant::now();

        assert!(matches!(
            limiter.check("10.0.0.1", now),
            RateLimitDecision::Allowed { .. }
        ));
        assert!(matches!(
            limiter.check("10.0.0.2", now),
            RateLimitDecision::Allowed { .. }
        ));
        assert_eq!(limiter.check("10.0.0.1", now), RateLimitDecision::Rejected);
    }

    #[test]
    fn window_expiry_readmits() {
        let limiter = RateLimiter::new(1);
        let start = Instant::now();

        assert!(matches!(
            limiter.check("10.0.0.1", start),
            RateLimitDecision::Allowed { .. }
        ));
        assert_eq!(limiter.check("10.0.0.1", start), RateLimitDecision::Rejected);

        // One window later the old timestamp is pruned.
        let later = start + WINDOW + Duration::from_secs(1);
        assert!(matches!(
            limiter.check("10.0.0.1", later),
            RateLimitDecision::Allowed { .. }
        ));
    }

    #[test]
    fn idle_clients_are_evicted() {
        let limiter = RateLimiter::new(10);
        let start = Instant::now();

        limiter.check("10.0.0.1", start);
        limiter.check("10.0.0.2", start);
        assert_eq!(limiter.tracked_clients(), 2);

        // A window later only the client making the request is tracked.
        let later = start + WINDOW + Duration::from_secs(1);
        limiter.check("10.0.0.1", later);
        assert_eq!(limiter.tracked_clients(), 1);
    }
}
