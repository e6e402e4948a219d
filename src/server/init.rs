/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * pool creation, migrations, seeding, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool
 * 2. Run database migrations
 * 3. Seed the default admin user and settings (idempotent)
 * 4. Build the application state and router
 *
 * Any failure here aborts startup; a server without its store or its
 * signing keys must not come up half-working.
 */

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::auth::sessions::{AuthKeys, ROLE_ADMIN};
use crate::auth::users::{create_user, get_user_by_username};
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;
use crate::settings::db::{get_setting, update_setting, CONTACT_FORM_STATUS};

/// Default admin credentials, seeded on first startup.
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Errors that abort server startup.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Create and configure the Axum application
///
/// Connects the store, prepares the schema and seed data, and returns the
/// configured router ready to serve.
pub async fn create_app(config: ServerConfig) -> Result<Router, InitError> {
    tracing::info!("connecting to database...");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    tracing::info!("database connection pool created");

    prepare_database(&pool).await?;

    Ok(build_app(pool, config))
}

/// Run migrations and seed initial data. Idempotent.
pub async fn prepare_database(pool: &SqlitePool) -> Result<(), InitError> {
    tracing::info!("running database migrations...");
    sqlx::migrate!().run(pool).await?;

    seed_admin_user(pool).await?;
    seed_default_settings(pool).await?;

    Ok(())
}

/// Build the router from an already prepared pool.
pub fn build_app(pool: SqlitePool, config: ServerConfig) -> Router {
    let keys = AuthKeys::new(config.jwt_secret.as_bytes());
    let state = AppState {
        db: pool,
        keys,
        config,
    };
    create_router(state)
}

/// Create the default admin account if no such user exists yet.
async fn seed_admin_user(pool: &SqlitePool) -> Result<(), InitError> {
    if get_user_by_username(pool, DEFAULT_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let password_hash = bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)?;
    create_user(pool, DEFAULT_ADMIN_USERNAME, &password_hash, ROLE_ADMIN).await?;
    tracing::warn!("seeded default admin user; change the password immediately");

    Ok(())
}

/// Ensure the contact-form flag exists; it defaults to disabled.
async fn seed_default_settings(pool: &SqlitePool) -> Result<(), InitError> {
    if get_setting(pool, CONTACT_FORM_STATUS).await?.is_none() {
        tracing::info!("seeding default contact form setting (disabled)");
        update_setting(pool, CONTACT_FORM_STATUS, serde_json::json!(false)).await?;
    }

    Ok(())
}

/// In-memory pool with the full schema and seed data, for unit tests.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    prepare_database(&pool)
        .await
        .expect("failed to prepare in-memory database");

    pool
}
