/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, constructed once at startup
 * and cloned into every handler. It owns:
 * - the SQLite connection pool (the single, explicitly constructed store
 *   handle for the whole process; no ambient globals)
 * - the token signing/verification keys
 * - the loaded server configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers and middleware extract just
 * the part of the state they need: the gate takes `State<AuthKeys>`, store
 * helpers take the pool.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::AuthKeys;
use crate::server::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool; the process-wide store handle
    pub db: SqlitePool,
    /// Token signing and verification keys
    pub keys: AuthKeys,
    /// Loaded server configuration
    pub config: ServerConfig,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.keys.clone()
    }
}

impl FromRef<AppState> for ServerConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
