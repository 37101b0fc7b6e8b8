//! Session cookie construction
//!
//! Maps issued tokens to browser cookies. This module only builds cookie
//! values; the server layer attaches them to the outgoing response. There
//! are no failure modes here.

use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use crate::config::CookieSettings;
use crate::token::TokenPair;

/// Cookie carrying the access token
pub const ACCESS_COOKIE: &str = "accessToken";

/// Cookie carrying the refresh token
pub const REFRESH_COOKIE: &str = "refreshToken";

fn session_cookie(
    name: &'static str,
    value: String,
    secure: bool,
    max_age_secs: i64,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Build both session cookies for a freshly issued token pair.
///
/// Each cookie's max-age matches the corresponding token's lifetime.
pub fn session_cookies(
    pair: &TokenPair,
    settings: &CookieSettings,
) -> (Cookie<'static>, Cookie<'static>) {
    (
        session_cookie(
            ACCESS_COOKIE,
            pair.access_token.clone(),
            settings.secure,
            settings.access_max_age_secs,
        ),
        session_cookie(
            REFRESH_COOKIE,
            pair.refresh_token.clone(),
            settings.secure,
            settings.refresh_max_age_secs,
        ),
    )
}

/// Build cookies that clear the session: empty values, immediate expiry.
///
/// Attributes match the cookies being overwritten so browsers treat them as
/// the same cookie.
pub fn cleared_cookies(settings: &CookieSettings) -> (Cookie<'static>, Cookie<'static>) {
    let clear = |name: &'static str| {
        Cookie::build((name, ""))
            .path("/")
            .http_only(true)
            .secure(settings.secure)
            .same_site(SameSite::Strict)
            .max_age(Duration::ZERO)
            .build()
    };
    (clear(ACCESS_COOKIE), clear(REFRESH_COOKIE))
}
