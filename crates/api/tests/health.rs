//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health on an empty store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_zero_testimonials() {
    let app = common::build_test_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["testimonialCount"], 0);
    assert_eq!(json["storage"], "memory");
    assert!(json["version"].is_string());
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: count follows creates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_counts_testimonials() {
    let app = common::build_test_app();
    let created = post_json(
        app.clone(),
        "/api/testimonials",
        json!({
            "platform": "x",
            "postUrl": "https://x.com/jane/status/1",
            "authorName": "Jane",
            "content": "Great work",
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["testimonialCount"], 1);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app();
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // UUID string, 36 chars with hyphens.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS allows any origin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = common::build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/testimonials")
        .header("Origin", "https://somewhere-else.example")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "*");
}
