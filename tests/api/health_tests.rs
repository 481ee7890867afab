//! Health Check API Tests

use axum::{body::Body, http::Request, http::StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::TestApp;

/// Test basic health check endpoint returns 200 OK with the version
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

/// Test liveness endpoint
#[tokio::test]
async fn test_liveness_endpoint() {
    let app = TestApp::new();

    let response = app
        .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

/// Test metrics endpoint exposes request counters by route template
#[tokio::test]
async fn test_metrics_label_routes_by_template() {
    let app = TestApp::new();
    let token = app.acting_as().await;
    let post = app.create_post("Observed").await;

    app.server
        .get(&format!("/api/posts/{}", post.id))
        .authorization_bearer(&token)
        .await;
    let response = app.server.get("/metrics").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let text = response.text();
    assert!(text.contains("posts_api_http_requests_total"));
    assert!(text.contains("/api/posts/{id}"));
}
