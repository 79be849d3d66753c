//! Shared helpers for server integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use graphwalk_server::{build_router, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router with default configuration (permissive CORS).
pub fn create_test_app() -> Router {
    build_router(&ServerConfig::default())
}

/// POST a JSON body to `/traverse`, returning status and parsed body.
///
/// Non-JSON bodies (extractor rejections) come back as `Value::Null`.
pub async fn post_traverse(app: Router, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/traverse")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
