//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` (via the shared
//! [`build_app_router`]) so tests exercise the same middleware stack that
//! production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use assets_api::auth::jwt::{Claims, JwtConfig};
use assets_api::config::ServerConfig;
use assets_api::middleware::rate_limit::RateLimiter;
use assets_api::router::build_app_router;
use assets_api::state::AppState;

/// Signing secret shared by the test config and minted tokens.
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and a quota high enough
/// that ordinary tests never trip the rate limiter.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        rate_limit_per_minute: 10_000,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied config (used by the
/// rate-limit tests to set a tiny quota).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit_per_minute));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        rate_limiter,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Token minting
// ---------------------------------------------------------------------------

/// Sign a token with the test secret, expiring 10 minutes from now.
pub fn mint_token(role: Option<&str>, scopes: Option<Vec<String>>) -> String {
    let claims = Claims {
        sub: "tester".to_string(),
        role: role.map(str::to_string),
        scopes,
        exp: chrono::Utc::now().timestamp() + 600,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

pub fn admin_token() -> String {
    mint_token(Some("ADMIN"), None)
}

pub fn staff_token() -> String {
    mint_token(Some("STAFF"), None)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON POST request with a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON PATCH request with a Bearer token.
pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A valid create-asset payload with the given serial number and facility.
/// The warranty expiry is one year out so create-time validation passes
/// regardless of when the test runs.
pub fn sample_asset(serial_number: &str, facility_name: &str) -> serde_json::Value {
    let expiry = chrono::Utc::now().date_naive() + chrono::Days::new(365);
    serde_json::json!({
        "asset_name": "MRI Scanner",
        "value": "150000",
        "purchase_date": "2024-01-10",
        "manufacturer": "Acme",
        "model": "X1",
        "serial_number": serial_number,
        "supplier": "MedSupply",
        "warranty": 24,
        "warranty_expiry": expiry.to_string(),
        "facility_name": facility_name,
    })
}

/// Create an asset through the API and return its response JSON.
pub async fn create_asset(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app.clone(), "/api/assets/addAsset", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
