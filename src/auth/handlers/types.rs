/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Request types carry their own validation rules;
 * handlers call `.validate()` before touching the store.
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct LoginRequest {
    /// Username (matched case-insensitively)
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,
    /// Password (verified against the stored hash, never stored)
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

/// Password change request
///
/// `new_password` must meet the minimum length policy and match
/// `confirm_password`; the mismatch error is attached to the confirmation
/// field so the form highlights the right input.
#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    #[validate(length(min = 1, message = "Current password is required."))]
    pub current_password: String,
    #[validate(length(min = 8, message = "New password must be at least 8 characters long."))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "New passwords don't match."))]
    pub confirm_password: String,
}

/// Generic success payload returned by login, logout, and password change.
#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_both_fields() {
        let request = LoginRequest {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_password_change_minimum_length() {
        let request = PasswordChangeRequest {
            current_password: "old".to_string(),
            new_password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn test_password_change_mismatch_flags_confirmation() {
        let request = PasswordChangeRequest {
            current_password: "old".to_string(),
            new_password: "long-enough-password".to_string(),
            confirm_password: "different-password".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirm_password"));
        assert!(!errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn test_password_change_field_names_are_camel_case() {
        let request: PasswordChangeRequest = serde_json::from_value(serde_json::json!({
            "currentPassword": "old",
            "newPassword": "long-enough-password",
            "confirmPassword": "long-enough-password",
        }))
        .unwrap();
        assert!(request.validate().is_ok());
    }
}
