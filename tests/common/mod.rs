//! Common test utilities and helpers
//!
//! Builds the full router on top of the in-memory credential store and
//! provides shortcuts for the register/login flow.

#![allow(dead_code)]

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use authgate::backend::auth::passwords::MIN_COST;
use authgate::backend::auth::MemoryCredentialStore;
use authgate::backend::routes::create_router;
use authgate::backend::server::{build_state, ServerConfig};

/// Signing secret of the test server
pub const TEST_SECRET: &str = "integration-test-signing-secret";

/// Create a test server backed by a fresh in-memory store
pub fn test_server() -> TestServer {
    let config = ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(MIN_COST)
        .build()
        .expect("test config is valid");

    let state = build_state(&config, Arc::new(MemoryCredentialStore::new()))
        .expect("failed to build test state");

    TestServer::new(create_router(state)).expect("failed to start test server")
}

/// Register an account and return its ID
pub async fn register_account(server: &TestServer, email: &str, password: &str) -> i64 {
    let response = server
        .post("/register")
        .json(&json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "birth_date": "1990-04-12",
            "email": email,
            "password": password,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_i64().expect("register response carries an id")
}

/// Log in and return the access token
pub async fn login_token(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Create authorization header name and value
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value"),
    )
}
