/**
 * Admin Route Protection
 *
 * This module provides the middleware guarding the admin panel. It is
 * layered over every protected route (admin pages and admin APIs); public
 * routes never pass through it.
 *
 * # Decision Table
 *
 * Per request, based on the session cookie and the kind of path:
 *
 * 1. No cookie: the login page renders; API paths get a JSON 401 (a
 *    programmatic client cannot follow a redirect to an HTML form); any
 *    other page redirects to the login page.
 * 2. Cookie present but the token is invalid, expired, or not an admin
 *    token: the stale cookie is cleared first, then the request is handled
 *    as if no cookie were present.
 * 3. Valid admin token: requests for the login page are redirected to the
 *    dashboard; everything else runs with the decoded identity attached.
 *
 * Token verification failures of any kind are normalized here: the client
 * only ever sees the generic 401 or the redirect, while the specific
 * reason is logged for audit.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_cookies::Cookies;
use uuid::Uuid;

use crate::auth::cookie::{clear_auth_cookie, get_auth_cookie};
use crate::auth::sessions::{verify_token, AuthKeys, Claims};
use crate::error::ApiError;

/// Path of the admin login page.
pub const LOGIN_PATH: &str = "/admin/login";

/// Path of the admin dashboard, where authenticated admins land.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Kind of protected path, which decides the failure shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// The login page itself; must stay reachable without a session
    LoginPage,
    /// An API endpoint; failures are JSON 401s, never redirects
    Api,
    /// Any other admin page; failures redirect to the login page
    Page,
}

/// Classify a protected path.
///
/// Everything under the API namespace gets the JSON-401 treatment, not just
/// the literal `/api/admin/*` routes.
pub fn classify_path(path: &str) -> PathKind {
    if path == LOGIN_PATH {
        PathKind::LoginPage
    } else if path.starts_with("/api/") {
        PathKind::Api
    } else {
        PathKind::Page
    }
}

/// Decoded identity of the authenticated admin, attached to the request by
/// the gate and handed to handlers as a typed extractor argument.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user_id: Uuid,
    pub username: String,
    pub role: String,
}

impl AdminSession {
    fn from_claims(claims: &Claims) -> Option<Self> {
        let user_id = Uuid::parse_str(&claims.sub).ok()?;
        Some(Self {
            user_id,
            username: claims.username.clone(),
            role: claims.role.clone(),
        })
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminSession>()
            .cloned()
            .ok_or_else(|| ApiError::auth("Authentication required"))
    }
}

/// The 401 body for API paths.
fn unauthenticated_json() -> Response {
    (
        axum::http::StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": "Authentication required" })),
    )
        .into_response()
}

/// Admin gate middleware
///
/// Layered over the admin pages and admin API routes. Requires a valid
/// admin session token in the `auth_token` cookie; on success the decoded
/// `AdminSession` is inserted into the request extensions for handlers to
/// extract.
pub async fn admin_gate(
    State(keys): State<AuthKeys>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let kind = classify_path(&path);

    let Some(token) = get_auth_cookie(&cookies) else {
        return match kind {
            PathKind::LoginPage => next.run(request).await,
            PathKind::Api => {
                tracing::warn!("unauthenticated API request to {}", path);
                unauthenticated_json()
            }
            PathKind::Page => {
                tracing::debug!("unauthenticated page request to {}, redirecting", path);
                Redirect::to(LOGIN_PATH).into_response()
            }
        };
    };

    // A cookie is present; anything short of a valid admin token means the
    // session is stale, and the cookie goes with it.
    let session = match verify_token(&keys, &token) {
        Ok(claims) if claims.is_admin() => AdminSession::from_claims(&claims),
        Ok(claims) => {
            tracing::warn!("token for {} rejected: role is not admin", claims.username);
            None
        }
        Err(err) => {
            tracing::warn!("token verification failed: {:?}", err.kind());
            None
        }
    };

    let Some(session) = session else {
        clear_auth_cookie(&cookies);
        return match kind {
            PathKind::LoginPage => next.run(request).await,
            PathKind::Api => unauthenticated_json(),
            PathKind::Page => Redirect::to(LOGIN_PATH).into_response(),
        };
    };

    // An authenticated admin never sees the login form.
    if kind == PathKind::LoginPage {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }

    request.extensions_mut().insert(session);
    next.run(request).await
}
