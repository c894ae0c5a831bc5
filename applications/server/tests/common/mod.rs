//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use roster_server::{bootstrap, config::ServerConfig, create_router, AppState, AuthService};
use roster_storage::UserStore;
use std::sync::Arc;

pub mod fixtures {
    pub const TEST_TOKEN: &str = "test-token";
}

/// Router over a store seeded with the default two users
pub fn create_test_app() -> (Router, Arc<UserStore>) {
    let store = Arc::new(UserStore::new());
    bootstrap::seed_store(&store, &ServerConfig::default().seed).expect("Failed to seed store");

    let auth_service = Arc::new(AuthService::new(fixtures::TEST_TOKEN));
    let app = create_router(AppState::new(Arc::clone(&store), auth_service));
    (app, store)
}

/// Authorized request with an optional JSON body
pub fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", fixtures::TEST_TOKEN),
        );

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
