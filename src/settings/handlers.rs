//! Settings HTTP handlers
//!
//! The public endpoint lets the contact page decide whether to render the
//! form; the admin endpoints read and toggle the flag.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::auth::gate::AdminSession;
use crate::error::ApiError;
use crate::server::state::AppState;

use super::db::{contact_form_enabled, update_setting, CONTACT_FORM_STATUS};

/// Body of the admin toggle request.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormUpdateRequest {
    pub is_active: bool,
}

/// Flag state, as the public contact page consumes it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormStatusResponse {
    pub is_active: bool,
}

/// Response to the admin toggle request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormUpdateResponse {
    pub success: bool,
    pub message: String,
    pub is_active: bool,
}

/// GET /api/settings/contact-form - public flag read
pub async fn get_contact_form_status(
    State(state): State<AppState>,
) -> Result<Json<ContactFormStatusResponse>, ApiError> {
    let is_active = contact_form_enabled(&state.db).await?;
    Ok(Json(ContactFormStatusResponse { is_active }))
}

/// GET /api/admin/settings/contact-form - admin flag read
pub async fn get_contact_form_setting(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<ContactFormStatusResponse>, ApiError> {
    let is_active = contact_form_enabled(&state.db).await?;
    Ok(Json(ContactFormStatusResponse { is_active }))
}

/// PATCH /api/admin/settings/contact-form - admin flag toggle
pub async fn update_contact_form_setting(
    State(state): State<AppState>,
    session: AdminSession,
    Json(request): Json<ContactFormUpdateRequest>,
) -> Result<Json<ContactFormUpdateResponse>, ApiError> {
    let updated = update_setting(
        &state.db,
        CONTACT_FORM_STATUS,
        serde_json::json!(request.is_active),
    )
    .await?;

    let is_active = updated.value.0.as_bool().unwrap_or(false);
    tracing::info!(
        "contact form {} by {}",
        if is_active { "enabled" } else { "disabled" },
        session.username
    );

    Ok(Json(ContactFormUpdateResponse {
        success: true,
        message: "Contact form status updated.".to_string(),
        is_active,
    }))
}
