//! API Error Module
//!
//! This module defines the closed error taxonomy for the HTTP layer.
//! Every handler returns `Result<_, ApiError>`, so no error crosses the
//! request boundary unhandled.
//!
//! # Module Structure
//!
//! ```
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `Validation` - Malformed input, reported with field-level detail
//! - `Auth` - Authentication failures, reported generically
//! - `NotFound` - Operations on nonexistent resources
//! - `Internal` - Unexpected failures, detail logged but never leaked

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
