//! Portfolio backend server
//!
//! Backend for a personal portfolio site: a static public site with a
//! contact form, plus a small admin panel (message inbox, password change,
//! and a feature flag toggling the contact form) guarded by cookie-based
//! JWT sessions.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, application state, initialization
//! - **`auth`** - session tokens, the session cookie, the admin gate, and
//!   the login/logout/password handlers
//! - **`messages`** - contact message store and handlers
//! - **`settings`** - key-value settings store and handlers
//! - **`routes`** - router assembly
//! - **`error`** - the API error taxonomy
//!
//! # Session Model
//!
//! Sessions are stateless: a signed, expiring JWT in an HTTP-only cookie.
//! Every request to a protected path re-verifies the token; logout simply
//! deletes the cookie. There is no server-side session table and no
//! revocation list.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`; the error enum is closed and its
//! boundary conversion is exhaustive, so nothing crosses the request
//! boundary unhandled.

/// Server setup and configuration
pub mod server;

/// Authentication, sessions, and the admin gate
pub mod auth;

/// Contact messages
pub mod messages;

/// Site settings
pub mod settings;

/// Route configuration
pub mod routes;

/// API error types
pub mod error;

// Re-export commonly used items
pub use error::ApiError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
