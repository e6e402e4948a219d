/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables.
 *
 * # Configuration Sources
 *
 * - `JWT_SECRET` - REQUIRED. The symmetric token-signing secret. A missing
 *   secret is a fatal startup error, never a runtime error path.
 * - `DATABASE_URL` - SQLite connection string; defaults to a local file.
 * - `SERVER_PORT` - listen port; defaults to 3000.
 * - `APP_ENV` - `production` enables the `Secure` cookie attribute.
 */

use thiserror::Error;

/// Default SQLite database, created next to the binary if absent.
const DEFAULT_DATABASE_URL: &str = "sqlite:portfolio.db?mode=rwc";

/// Configuration errors that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET environment variable is not defined")]
    MissingJwtSecret,

    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
}

/// Runtime configuration, loaded once in `main` and carried in `AppState`.
#[derive(Clone)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Token-signing secret
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// Whether session cookies carry the `Secure` attribute
    pub secure_cookies: bool,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// Fails fatally when `JWT_SECRET` is unset so a misconfigured server
    /// never starts issuing unsigned-in-practice sessions.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        let secure_cookies =
            std::env::var("APP_ENV").map(|e| e == "production").unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            secure_cookies,
        })
    }
}
