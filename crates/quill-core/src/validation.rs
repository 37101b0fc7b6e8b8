//! Input validation
//!
//! Shape checks run before any store interaction so malformed input fails
//! with a structured `Validation` error instead of a storage fault.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, Result};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"))
}

/// Usernames must be non-empty
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::validation("username must not be empty"));
    }
    Ok(())
}

/// Emails must match a simple `local@domain.tld` shape
pub fn validate_email(email: &str) -> Result<()> {
    if !email_regex().is_match(email) {
        return Err(Error::validation("email is malformed"));
    }
    Ok(())
}

/// Passwords must not be empty or all-whitespace
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(Error::validation("password must not be empty"));
    }
    Ok(())
}
