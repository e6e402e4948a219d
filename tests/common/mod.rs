//! Shared test fixtures
//!
//! Builds the full application against an in-memory SQLite store (schema
//! migrated, default admin and settings seeded) and provides small request
//! helpers around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use portfolio::server::{build_app, prepare_database, ServerConfig};

/// Configuration used by the test application.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        port: 0,
        secure_cookies: false,
    }
}

/// Build the application against a fresh in-memory store.
pub async fn test_app() -> Router {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    prepare_database(&pool)
        .await
        .expect("failed to prepare test database");

    build_app(pool, test_config())
}

/// Send one request through the app.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("request failed")
}

/// Build a GET request, optionally carrying a session cookie.
pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("invalid request")
}

/// Build a JSON request, optionally carrying a session cookie.
pub fn json_request(
    method: &str,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("invalid request")
}

/// Build a bodyless request with an arbitrary method.
pub fn bare_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("invalid request")
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

/// Extract the `auth_token=<value>` pair from a Set-Cookie header, if the
/// response set a non-empty session cookie.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or("").trim().to_string())
        .find(|pair| pair.starts_with("auth_token=") && *pair != "auth_token=")
}

/// Whether the response instructs the client to delete the session cookie.
pub fn clears_session_cookie(response: &Response<Body>) -> bool {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.split(';').next().unwrap_or("").trim() == "auth_token=")
}

/// Log in with the seeded admin credentials; returns the session cookie.
pub async fn login_as_admin(app: &Router) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/login",
            serde_json::json!({ "username": "admin", "password": "admin123" }),
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response).expect("login did not set a session cookie")
}
