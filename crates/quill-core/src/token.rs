//! Signed token issuance - JWT access/refresh pairs

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::models::{AccessClaims, RefreshClaims};

/// A freshly minted access/refresh token pair
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mints and verifies HS256-signed tokens bound to a user identity.
///
/// The secret and expirations are fixed at construction; a missing secret is
/// a startup fault, never a per-request condition.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        if config.token_secret.trim().is_empty() {
            return Err(Error::signing("token secret is not configured"));
        }
        let secret = config.token_secret.as_bytes();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl: Duration::seconds(config.access_token_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_secs),
        })
    }

    /// Issue an access/refresh pair for the given subject.
    ///
    /// The refresh token carries a random nonce so sequential issuances for
    /// the same subject are always distinct.
    pub fn issue(&self, user_id: &str) -> Result<TokenPair> {
        let now = Utc::now();

        let access = AccessClaims {
            sub: user_id.to_string(),
            exp: (now + self.access_ttl).timestamp(),
        };
        let refresh = RefreshClaims {
            sub: user_id.to_string(),
            nonce: Uuid::new_v4().to_string(),
            exp: (now + self.refresh_ttl).timestamp(),
        };

        let header = Header::default();
        Ok(TokenPair {
            access_token: encode(&header, &access, &self.encoding_key)?,
            refresh_token: encode(&header, &refresh, &self.encoding_key)?,
        })
    }

    /// Verify signature and expiry of an access token
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }

    /// Verify signature and expiry of a refresh token
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims> {
        let data = decode::<RefreshClaims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}
