//! Runtime configuration
//!
//! The token secret and expirations are read once at startup and handed to
//! the components that need them. Business logic never touches the process
//! environment directly.

use crate::error::{Error, Result};

/// Default access token lifetime: 15 minutes
const DEFAULT_ACCESS_TTL_SECS: i64 = 15 * 60;

/// Default refresh token lifetime: 7 days
const DEFAULT_REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Authentication configuration, consumed by [`crate::token::TokenIssuer`]
/// and (via [`CookieSettings`]) by the session transport.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared HS256 signing secret
    pub token_secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: i64,
    /// Whether session cookies carry the `Secure` attribute
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// Load configuration from the environment.
    ///
    /// `TOKEN_SECRET` is required and must be non-blank; a missing secret is
    /// a fatal configuration fault and should abort startup, never surface
    /// per request. `ACCESS_TOKEN_EXPIRATION` and `REFRESH_TOKEN_EXPIRATION`
    /// are lifetimes in seconds. `APP_ENV=production` enables `Secure`
    /// cookies.
    pub fn from_env() -> Result<Self> {
        let token_secret = std::env::var("TOKEN_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::signing("TOKEN_SECRET is not set"))?;

        if token_secret.len() < 32 {
            log::warn!("TOKEN_SECRET is shorter than 32 characters; consider a longer secret");
        }

        Ok(Self {
            token_secret,
            access_token_ttl_secs: env_seconds("ACCESS_TOKEN_EXPIRATION", DEFAULT_ACCESS_TTL_SECS)?,
            refresh_token_ttl_secs: env_seconds(
                "REFRESH_TOKEN_EXPIRATION",
                DEFAULT_REFRESH_TTL_SECS,
            )?,
            secure_cookies: std::env::var("APP_ENV").as_deref() == Ok("production"),
        })
    }

    /// Cookie settings matching this configuration
    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings {
            secure: self.secure_cookies,
            access_max_age_secs: self.access_token_ttl_secs,
            refresh_max_age_secs: self.refresh_token_ttl_secs,
        }
    }
}

/// Attributes applied to session cookies by [`crate::session`]
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub secure: bool,
    pub access_max_age_secs: i64,
    pub refresh_max_age_secs: i64,
}

fn env_seconds(name: &str, default: i64) -> Result<i64> {
    match std::env::var(name) {
        Ok(raw) => {
            let secs: i64 = raw
                .parse()
                .map_err(|_| Error::config(format!("{name} must be a number of seconds")))?;
            if secs <= 0 {
                return Err(Error::config(format!("{name} must be positive")));
            }
            Ok(secs)
        }
        Err(_) => Ok(default),
    }
}
