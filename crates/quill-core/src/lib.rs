//! # quill-core
//!
//! Credential and session management core for Quill.
//!
//! This crate provides:
//! - Database operations (`db` module)
//! - User records and wire types (`models` module)
//! - Password hashing and verification (`password` module)
//! - Signed access/refresh token issuance (`token` module)
//! - Session cookie construction (`session` module)
//! - Registration/login orchestration (`service` module)
//! - Unified error handling (`error` module)
//!
//! The crate is framework-independent: the HTTP surface lives in
//! `quill-server` and only attaches what this crate produces.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod password;
pub mod service;
pub mod session;
pub mod store;
pub mod token;
pub mod validation;

// Re-exports for convenience
pub use config::{AuthConfig, CookieSettings};
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    AccessClaims, LoginRequest, NewUser, RefreshClaims, RegisterRequest, UpdateUserRequest, User,
    UserResponse, UserUpdate,
};
pub use service::AuthService;
pub use session::{cleared_cookies, session_cookies, ACCESS_COOKIE, REFRESH_COOKIE};
pub use store::{SqliteUserStore, UserStore};
pub use token::{TokenIssuer, TokenPair};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
