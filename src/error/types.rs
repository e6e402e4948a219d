/**
 * API Error Types
 *
 * This module defines the error type used by all HTTP handlers. The enum is
 * closed: every failure a handler can produce is one of these four variants,
 * and the boundary (`conversion.rs`) matches them exhaustively.
 *
 * # Error Categories
 *
 * - `Validation` - the caller sent malformed input; carries field-level
 *   detail and is never logged as a server fault
 * - `Auth` - the caller is not (or no longer) authenticated; the message is
 *   always generic so nothing about stored accounts leaks
 * - `NotFound` - the addressed resource does not exist
 * - `Internal` - an unexpected failure (store unreachable, hashing error);
 *   the detail is logged server-side and never sent to the client
 */

use std::collections::BTreeMap;

use thiserror::Error;

/// Field name -> list of human-readable problems with that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors produced by HTTP handlers and the auth gate.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input; reported to the caller with field-level detail.
    #[error("validation failed")]
    Validation {
        /// Per-field error messages, keyed by the JSON field name
        details: FieldErrors,
    },

    /// Missing, invalid, or expired credentials.
    #[error("{message}")]
    Auth {
        /// Client-visible message; always generic
        message: String,
    },

    /// The addressed resource does not exist.
    #[error("{message}")]
    NotFound {
        /// Client-visible message
        message: String,
    },

    /// Unexpected internal failure. The message is for the server log only.
    #[error("{message}")]
    Internal {
        /// Internal detail; logged, never returned to the client
        message: String,
    },
}

impl ApiError {
    /// Create a validation error for a single field.
    pub fn field(name: impl Into<String>, problem: impl Into<String>) -> Self {
        let mut details = FieldErrors::new();
        details.insert(name.into(), vec![problem.into()]);
        Self::Validation { details }
    }

    /// Create an authentication error with a generic client-visible message.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error. The message is logged, not leaked.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(format!("database error: {err}"))
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("password hashing error: {err}"))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::internal(format!("token encoding error: {err}"))
    }
}

/// Convert a Rust field name to the camelCase name it has on the wire.
fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            details.insert(wire_field_name(field), messages);
        }
        Self::Validation { details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_carries_detail() {
        let error = ApiError::field("email", "Please enter a valid email address.");
        match error {
            ApiError::Validation { details } => {
                assert_eq!(
                    details.get("email"),
                    Some(&vec!["Please enter a valid email address.".to_string()])
                );
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let error: ApiError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(error, ApiError::Internal { .. }));
    }

    #[test]
    fn test_auth_error_message() {
        let error = ApiError::auth("Invalid username or password");
        assert_eq!(error.to_string(), "Invalid username or password");
    }

    #[test]
    fn test_wire_field_name() {
        assert_eq!(wire_field_name("confirm_password"), "confirmPassword");
        assert_eq!(wire_field_name("email"), "email");
    }
}
