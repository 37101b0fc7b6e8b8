//! Password hashing and verification
//!
//! Salted bcrypt with a fixed work factor. These functions are CPU-bound;
//! the auth service runs them on the blocking pool so a slow hash never
//! stalls unrelated requests.

use crate::error::Result;
use crate::validation;

/// bcrypt work factor
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password.
///
/// Fails with a validation error when the input is empty or all-whitespace.
pub fn hash_password(password: &str) -> Result<String> {
    validation::validate_password(password)?;
    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}

/// Verify a plaintext password against a stored hash.
///
/// Returns `false` for a malformed or missing hash rather than erroring, so
/// the caller can treat a bad hash and a wrong password identically.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let hash = hash_password("Secret1!").unwrap();
        assert!(!hash.is_empty());
        assert_ne!(hash, "Secret1!");
    }

    #[test]
    fn test_hash_is_salted() {
        // Two hashes of the same plaintext differ, yet both verify.
        let first = hash_password("Secret1!").unwrap();
        let second = hash_password("Secret1!").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("Secret1!", &first));
        assert!(verify_password("Secret1!", &second));
    }

    #[test]
    fn test_verify_rejects_altered_plaintext() {
        let hash = hash_password("Secret1!").unwrap();

        assert!(!verify_password("Secret1?", &hash));
        assert!(!verify_password("secret1!", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(hash_password("").is_err());
        assert!(hash_password("   ").is_err());
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        assert!(!verify_password("Secret1!", "not-a-bcrypt-hash"));
        assert!(!verify_password("Secret1!", ""));
    }
}
