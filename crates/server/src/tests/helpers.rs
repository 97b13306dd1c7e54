// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helpers: router construction and request plumbing.

use animals_api::seed_fixtures;
use animals_persistence::Persistence;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde::{Serialize, de::DeserializeOwned};
use tower::ServiceExt;

use crate::{AppState, build_router};

/// Builds a router over a fresh in-memory database seeded with fixtures.
pub fn create_seeded_app() -> Router {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    seed_fixtures(&mut persistence).expect("Failed to seed fixtures");
    build_router(AppState::new(persistence))
}

/// Builds a router over a fresh, empty in-memory database.
pub fn create_empty_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState::new(persistence))
}

/// A response reduced to what the tests inspect.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Response body is not the expected JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let location: Option<String> = response
        .headers()
        .get("location")
        .map(|value| value.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        location,
        body: body.to_vec(),
    }
}

pub async fn get_request(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json<T: Serialize>(app: &Router, uri: &str, body: &T) -> TestResponse {
    send_json(app, "POST", uri, serde_json::to_string(body).unwrap()).await
}

pub async fn put_json<T: Serialize>(app: &Router, uri: &str, body: &T) -> TestResponse {
    send_json(app, "PUT", uri, serde_json::to_string(body).unwrap()).await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: String) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}
