//! Unified error handling for quill-core

use thiserror::Error;

/// Core error type for quill-core
///
/// The auth service re-expresses every lower-layer failure in this taxonomy;
/// raw driver or cryptography errors never cross the transport boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("duplicate identity: {0}")]
    DuplicateIdentity(String),

    // Unknown username and wrong password share this variant so callers
    // cannot tell which half of the credential pair was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token signing error: {0}")]
    Signing(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for quill-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a duplicate identity error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Error::DuplicateIdentity(msg.into())
    }

    /// Create a token signing error
    pub fn signing(msg: impl Into<String>) -> Self {
        Error::Signing(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}
