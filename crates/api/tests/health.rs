//! Integration tests for the health endpoint, general HTTP behaviour, and
//! rate limiting.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "assets-service");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: rate limit headers are present on successful responses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_rate_limit_headers(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get("X-RateLimit-Limit").unwrap().to_str().unwrap(),
        "10000"
    );
    assert!(headers.get("X-RateLimit-Remaining").is_some());
    assert!(headers.get("X-RateLimit-Reset").is_some());
}

// ---------------------------------------------------------------------------
// Test: over-quota requests are rejected with 429 and a reset hint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn over_quota_requests_rejected_with_429(pool: PgPool) {
    let mut config = common::test_config();
    config.rate_limit_per_minute = 2;
    let app = common::build_test_app_with_config(pool, config);

    // In-process requests carry no peer address, so all share one bucket.
    assert_eq!(get(app.clone(), "/health").await.status(), StatusCode::OK);
    assert_eq!(get(app.clone(), "/health").await.status(), StatusCode::OK);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(
        response.headers().get("X-RateLimit-Reset").is_some(),
        "429 must carry a reset hint"
    );

    let json = body_json(response).await;
    assert_eq!(json["code"], "RATE_LIMITED");
}
