//! Shared helpers for integration tests

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;

use quill_core::{AuthConfig, AuthService, Database, SqliteUserStore, TokenIssuer};
use quill_server::{app, AppState};

/// Build an app over a fresh temp database.
///
/// The TempDir guard must stay alive for the duration of the test.
pub async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("quill.db")).await.unwrap();

    let config = AuthConfig {
        token_secret: "integration-test-secret-0123456789".to_string(),
        access_token_ttl_secs: 900,
        refresh_token_ttl_secs: 604_800,
        secure_cookies: false,
    };
    let issuer = TokenIssuer::new(&config).unwrap();
    let store = SqliteUserStore::new(db.pool.clone());
    let state = AppState::new(AuthService::new(store, issuer), config.cookie_settings());

    (app(state), dir)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// All Set-Cookie header values of a response
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
