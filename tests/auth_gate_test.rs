//! Auth gate integration tests
//!
//! Exercises the route-protection middleware over the full router: the
//! redirect-vs-JSON-401 branching, stale cookie clearing, and the login
//! page behavior for authenticated admins.

mod common;

use axum::http::{header, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use std::time::{SystemTime, UNIX_EPOCH};

use common::*;
use portfolio::auth::Claims;

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Sign a claims set with an arbitrary secret, bypassing the server.
fn forge_token(secret: &[u8], exp: u64) -> String {
    let claims = Claims {
        sub: uuid::Uuid::new_v4().to_string(),
        username: "admin".to_string(),
        role: "admin".to_string(),
        exp,
        iat: unix_now(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).unwrap()
}

#[tokio::test]
async fn page_without_cookie_redirects_to_login() {
    let app = test_app().await;

    let response = send(&app, get_request("/admin/dashboard", None)).await;

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/login"
    );
}

#[tokio::test]
async fn api_without_cookie_gets_json_401_not_redirect() {
    let app = test_app().await;

    let response = send(&app, get_request("/api/messages", None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::LOCATION).is_none());
    let body = body_json(response).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn login_page_renders_without_cookie() {
    let app = test_app().await;

    let response = send(&app, get_request("/admin/login", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn garbage_cookie_on_api_clears_cookie_and_401s() {
    let app = test_app().await;

    let response = send(
        &app,
        get_request("/api/messages", Some("auth_token=not-a-real-token")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(clears_session_cookie(&response));
}

#[tokio::test]
async fn garbage_cookie_on_page_clears_cookie_and_redirects() {
    let app = test_app().await;

    let response = send(
        &app,
        get_request("/admin/dashboard", Some("auth_token=not-a-real-token")),
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/login"
    );
    assert!(clears_session_cookie(&response));
}

#[tokio::test]
async fn garbage_cookie_on_login_page_is_cleared_and_form_renders() {
    let app = test_app().await;

    let response = send(
        &app,
        get_request("/admin/login", Some("auth_token=not-a-real-token")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(clears_session_cookie(&response));
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = test_app().await;

    // Signed with the right secret but expired an hour ago
    let token = forge_token(b"integration-test-secret", unix_now() - 3600);
    let cookie = format!("auth_token={token}");

    let response = send(&app, get_request("/api/messages", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(clears_session_cookie(&response));
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let app = test_app().await;

    let token = forge_token(b"some-other-secret", unix_now() + 3600);
    let cookie = format!("auth_token={token}");

    let response = send(&app, get_request("/admin/dashboard", Some(&cookie))).await;

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/login"
    );
}

#[tokio::test]
async fn authenticated_admin_reaches_protected_pages() {
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;

    let response = send(&app, get_request("/admin/dashboard", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get_request("/api/messages", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn authenticated_admin_is_redirected_away_from_login_page() {
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;

    let response = send(&app, get_request("/admin/login", Some(&cookie))).await;

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/dashboard"
    );
}

#[tokio::test]
async fn admin_root_redirects_to_dashboard_when_authenticated() {
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;

    let response = send(&app, get_request("/admin", Some(&cookie))).await;

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/dashboard"
    );
}

#[tokio::test]
async fn unknown_admin_page_still_requires_a_session() {
    let app = test_app().await;

    // Unauthenticated: redirected before any 404 is revealed
    let response = send(&app, get_request("/admin/no-such-page", None)).await;
    assert!(response.status().is_redirection());

    // Authenticated: a plain 404
    let cookie = login_as_admin(&app).await;
    let response = send(&app, get_request("/admin/no-such-page", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_routes_bypass_the_gate() {
    let app = test_app().await;

    let response = send(&app, get_request("/api/settings/contact-form", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
