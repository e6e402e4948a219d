/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for admin sessions.
 *
 * Tokens are signed with HS256 using a server-held secret. The secret is
 * loaded once at startup (`ServerConfig::from_env` fails if it is missing)
 * and carried in `AuthKeys`; nothing in this module touches the environment.
 *
 * Verification is deterministic and side-effect-free: the same valid token
 * always decodes to the same claims until it expires.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::users::User;

/// Session lifetime: tokens (and the cookie that carries them) last 24 hours.
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// The only role the admin panel knows about.
pub const ROLE_ADMIN: &str = "admin";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (stable, opaque string form of the account's UUID)
    pub sub: String,
    /// Username, for display and audit logging
    pub username: String,
    /// Role; only "admin" is issued
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Whether these claims grant access to the admin panel.
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Signing and verification keys, built once at startup from the
/// configured secret and shared through `AppState`.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a session token for a user
///
/// # Arguments
/// * `keys` - Signing keys
/// * `user` - The authenticated user record
///
/// # Returns
/// Signed JWT string, expiring `TOKEN_TTL_SECS` from now
pub fn issue_token(keys: &AuthKeys, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role.clone(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify and decode a session token
///
/// Checks the signature, the expiration, and the claim shape. Callers treat
/// every error identically as "unauthenticated"; the specific kind (expired
/// vs. bad signature vs. malformed) is only useful for logging.
pub fn verify_token(keys: &AuthKeys, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(token, &keys.decoding, &validation)?;
    Ok(token_data.claims)
}
