/**
 * Login Handler
 *
 * This module implements the handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Validate the request body
 * 2. Look up the user by username (case-insensitive)
 * 3. Verify the password using bcrypt
 * 4. Issue a session token and set the `auth_token` cookie
 *
 * # Security
 *
 * - Invalid credentials return 401 with the same generic message whether
 *   the username or the password was wrong (no user enumeration)
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use tower_cookies::Cookies;
use validator::Validate;

use crate::auth::cookie::set_auth_cookie;
use crate::auth::handlers::types::{LoginRequest, StatusResponse};
use crate::auth::sessions::issue_token;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Validates the submitted credentials and, on success, sets the session
/// cookie and returns a success payload.
///
/// # Errors
///
/// * `400 Bad Request` - missing username or password
/// * `401 Unauthorized` - unknown user or wrong password (indistinguishable)
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(request): Json<LoginRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    request.validate()?;

    tracing::info!("login attempt for: {}", request.username);

    let user = get_user_by_username(&state.db, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login failed: unknown username {}", request.username);
            ApiError::auth("Invalid username or password")
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("login failed: wrong password for {}", user.username);
        return Err(ApiError::auth("Invalid username or password"));
    }

    let token = issue_token(&state.keys, &user)?;
    set_auth_cookie(&cookies, token, state.config.secure_cookies);

    tracing::info!("login successful for: {}", user.username);

    Ok(Json(StatusResponse::ok("Login successful")))
}
