//! Contact message HTTP handlers
//!
//! The submit handler is public by design (it is the site's contact form);
//! the inbox handlers sit behind the admin gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::auth::gate::AdminSession;
use crate::auth::handlers::types::StatusResponse;
use crate::error::ApiError;
use crate::server::state::AppState;

use super::db::{
    add_message, delete_message, list_messages, mark_message_read, AddMessageInput, ContactMessage,
};

/// Contact form submission (must match the public form's fields)
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ContactFormRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(
        email(message = "Please enter a valid email address."),
        length(max = 100, message = "Email must be at most 100 characters.")
    )]
    pub email: String,
    #[validate(length(min = 5, max = 150, message = "Subject must be at least 5 characters."))]
    pub subject: String,
    #[validate(length(min = 10, max = 5000, message = "Message must be at least 10 characters."))]
    pub message: String,
}

/// Response to a successful contact form submission.
#[derive(Debug, Serialize)]
pub struct ContactSubmitResponse {
    pub success: bool,
    pub message: String,
    pub data: ContactMessage,
}

/// Response to the admin inbox listing.
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<ContactMessage>,
}

/// POST /api/contact - public contact form submission
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactFormRequest>,
) -> Result<(StatusCode, Json<ContactSubmitResponse>), ApiError> {
    request.validate()?;

    let stored = add_message(
        &state.db,
        AddMessageInput {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        },
    )
    .await?;

    tracing::info!("contact message received from {}", stored.email);

    Ok((
        StatusCode::CREATED,
        Json(ContactSubmitResponse {
            success: true,
            message: "Message received successfully!".to_string(),
            data: stored,
        }),
    ))
}

/// GET /api/messages - admin inbox, newest first
pub async fn get_messages(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<MessageListResponse>, ApiError> {
    let messages = list_messages(&state.db).await?;
    Ok(Json(MessageListResponse { messages }))
}

/// DELETE /api/messages/{id}
pub async fn remove_message(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusResponse>, ApiError> {
    tracing::info!("deleting message {} (requested by {})", id, session.username);

    let deleted = delete_message(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::not_found("Message not found"));
    }

    Ok(Json(StatusResponse::ok("Message deleted successfully")))
}

/// PATCH /api/messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusResponse>, ApiError> {
    tracing::info!(
        "marking message {} as read (requested by {})",
        id,
        session.username
    );

    let updated = mark_message_read(&state.db, id).await?;
    if !updated {
        return Err(ApiError::not_found("Message not found"));
    }

    Ok(Json(StatusResponse::ok("Message marked as read")))
}
