//! HTTP handlers for the authentication endpoints
//!
//! - `login` - POST /api/login
//! - `logout` - POST /api/logout
//! - `change_password` - PATCH /api/admin/profile/change-password

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Password change handler
pub mod password;

// Re-export handlers for route configuration
pub use login::login;
pub use logout::logout;
pub use password::change_password;
