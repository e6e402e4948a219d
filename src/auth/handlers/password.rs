/**
 * Password Change Handler
 *
 * This module implements the handler for PATCH /api/admin/profile/change-password.
 * The route sits behind the admin gate, so the handler receives the already
 * verified session identity; it still re-verifies the current password
 * against the stored hash before accepting the new one.
 */

use axum::{extract::State, response::Json};
use validator::Validate;

use crate::auth::gate::AdminSession;
use crate::auth::handlers::types::{PasswordChangeRequest, StatusResponse};
use crate::auth::users::{get_user_by_id, update_user_password};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Password change handler
///
/// # Errors
///
/// * `400 Bad Request` - policy violations (short password, mismatch) or an
///   incorrect current password, each reported against its field
/// * `401 Unauthorized` - no valid session (rejected by the gate or the
///   extractor before this body runs)
/// * `404 Not Found` - the session's user no longer exists in the store
pub async fn change_password(
    State(state): State<AppState>,
    session: AdminSession,
    Json(request): Json<PasswordChangeRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    request.validate()?;

    let user = get_user_by_id(&state.db, session.user_id)
        .await?
        .ok_or_else(|| {
            tracing::error!(
                "authenticated user {} not found during password change",
                session.user_id
            );
            ApiError::not_found("User not found.")
        })?;

    let current_ok = bcrypt::verify(&request.current_password, &user.password_hash)?;
    if !current_ok {
        tracing::warn!("incorrect current password for user {}", user.username);
        return Err(ApiError::field(
            "currentPassword",
            "Incorrect current password.",
        ));
    }

    let new_hash = bcrypt::hash(&request.new_password, bcrypt::DEFAULT_COST)?;
    let updated = update_user_password(&state.db, user.id, &new_hash).await?;
    if !updated {
        return Err(ApiError::internal(format!(
            "password update affected no rows for user {}",
            user.id
        )));
    }

    tracing::info!("password changed for user {}", user.username);

    Ok(Json(StatusResponse::ok("Password updated successfully.")))
}
