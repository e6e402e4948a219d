//! Contact message module
//!
//! Store operations and HTTP handlers for contact messages: public
//! submission plus the admin inbox (list, mark read, delete).

/// Database operations for contact messages
pub mod db;

/// Contact message HTTP handlers
pub mod handlers;

pub use db::{AddMessageInput, ContactMessage};
pub use handlers::{get_messages, mark_read, remove_message, submit_contact};
