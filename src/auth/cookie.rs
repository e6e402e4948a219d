//! Session cookie transport
//!
//! Bridges session tokens to the `auth_token` HTTP cookie. This module only
//! moves the token in and out of the cookie jar; validation lives in
//! `sessions` and policy in `gate`.

use tower_cookies::cookie::time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use crate::auth::sessions::TOKEN_TTL_SECS;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "auth_token";

/// Build the session cookie.
///
/// HTTP-only so page scripts cannot read it, `SameSite=Strict` so it is not
/// sent on cross-site navigation, path `/`, and a max-age matching the token
/// lifetime. `secure` is set in production so the cookie only travels over
/// HTTPS.
pub fn auth_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::seconds(TOKEN_TTL_SECS as i64))
        .build()
}

/// Store the session token on the outgoing response.
pub fn set_auth_cookie(cookies: &Cookies, token: String, secure: bool) {
    cookies.add(auth_cookie(token, secure));
}

/// Read the session token from the incoming request, if present.
pub fn get_auth_cookie(cookies: &Cookies) -> Option<String> {
    cookies.get(AUTH_COOKIE).map(|c| c.value().to_string())
}

/// Delete the session cookie (sends an immediately-expired directive).
///
/// The removal cookie must carry the same path the original was set with,
/// or browsers will keep the stale one.
pub fn clear_auth_cookie(cookies: &Cookies) {
    let mut removal = Cookie::new(AUTH_COOKIE, "");
    removal.set_path("/");
    cookies.remove(removal);
}
