//! Logout handler
//!
//! POST /api/logout deletes the session cookie. Tokens are stateless, so
//! there is nothing to revoke server-side; clearing the cookie ends the
//! session. Idempotent: logging out with no cookie present still succeeds.

use axum::response::Json;
use tower_cookies::Cookies;

use crate::auth::cookie::clear_auth_cookie;
use crate::auth::handlers::types::StatusResponse;

/// Logout handler
pub async fn logout(cookies: Cookies) -> Json<StatusResponse> {
    clear_auth_cookie(&cookies);
    tracing::info!("logout, session cookie cleared");
    Json(StatusResponse::ok("Logged out successfully"))
}
