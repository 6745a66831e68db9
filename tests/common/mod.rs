//! Shared helpers for driving the site router in-process.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use studio_kernel::settings::Settings;
use studio_storage::MemStorage;
use tower::ServiceExt;

pub fn seeded_app() -> Router {
    app_with(MemStorage::with_seed_data())
}

pub fn empty_app() -> Router {
    app_with(MemStorage::new())
}

fn app_with(store: MemStorage) -> Router {
    let registry = studio_app::build_registry(Arc::new(store)).unwrap();
    studio_http::build_router(&registry, &Settings::default())
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the status and returns the decoded body.
pub async fn expect_json(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

/// `GET` the uri, assert the status and return the decoded body.
pub async fn get_json(app: &Router, uri: &str, status: StatusCode) -> Value {
    expect_json(get(app, uri).await, status).await
}
