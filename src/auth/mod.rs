//! Authentication Module
//!
//! This module implements the session authentication and authorization
//! layer guarding the admin panel: token issuance and verification, the
//! session cookie lifecycle, and the route-protection middleware.
//!
//! # Module Structure
//!
//! ```
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User record and credential store operations
//! ├── sessions.rs     - JWT issuance and verification
//! ├── cookie.rs       - Session cookie transport
//! ├── gate.rs         - Admin route-protection middleware
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Login handler
//!     ├── logout.rs   - Logout handler
//!     └── password.rs - Password change handler
//! ```
//!
//! # Session Flow
//!
//! 1. **Login**: credentials verified against the store → token issued →
//!    `auth_token` cookie set
//! 2. **Protected request**: the gate reads the cookie, verifies the token,
//!    and attaches the decoded `AdminSession` to the request
//! 3. **Logout**: the cookie is deleted; tokens are stateless so nothing is
//!    revoked server-side
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256-signed and expire after 24 hours
//! - Invalid credentials return 401 with no information leakage
//! - The session cookie is HTTP-only, SameSite=Strict, and Secure in
//!   production

/// User record and credential store operations
pub mod users;

/// JWT issuance and verification
pub mod sessions;

/// Session cookie transport
pub mod cookie;

/// Admin route-protection middleware
pub mod gate;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use gate::{admin_gate, AdminSession};
pub use handlers::types::{LoginRequest, PasswordChangeRequest, StatusResponse};
pub use handlers::{change_password, login, logout};
pub use sessions::{issue_token, verify_token, AuthKeys, Claims};
