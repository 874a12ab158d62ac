//! Integration tests for the health check endpoints and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET / returns the health payload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn root_returns_health_payload(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Welcome to Task Management API");
    assert_eq!(json["version"], "test");
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = false)]
async fn health_alias_matches_root(pool: PgPool) {
    let app = build_test_app(pool.clone()).await;
    let root = body_json(get(app, "/").await).await;

    let app = build_test_app(pool).await;
    let health = body_json(get(app, "/health").await).await;

    assert_eq!(root, health);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a valid UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    let app = build_test_app(pool).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/tasks")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}
