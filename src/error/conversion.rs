/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses. The match is
 * exhaustive: adding a variant without deciding its wire shape is a compile
 * error.
 *
 * # Response Format
 *
 * Errors are returned as JSON:
 * ```json
 * { "error": "Validation failed", "details": { "email": ["..."] } }
 * ```
 * `details` is present only for validation errors. Internal errors are
 * logged with their full detail and surfaced as a generic message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { details } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": "Validation failed",
                    "details": details,
                }),
            ),
            ApiError::Auth { message } => {
                tracing::warn!("authentication failure: {}", message);
                (
                    StatusCode::UNAUTHORIZED,
                    serde_json::json!({ "error": message }),
                )
            }
            ApiError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Internal { message } => {
                tracing::error!("internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
