//! Site settings module
//!
//! Key-value settings store and handlers. The only flag in use toggles the
//! public contact form on and off.

/// Database operations for site settings
pub mod db;

/// Settings HTTP handlers
pub mod handlers;

pub use db::{contact_form_enabled, get_setting, update_setting, Setting, CONTACT_FORM_STATUS};
pub use handlers::{get_contact_form_setting, get_contact_form_status, update_contact_form_setting};
