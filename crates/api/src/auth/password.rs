//! bcrypt password hashing and verification.
//!
//! Stored hashes are standard `$2b$` strings, so the cost and salt travel
//! with the hash.

use std::sync::LazyLock;

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash checked when a login names no known account, so that rejection
/// costs one full verification just like a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("codetech-no-such-account").ok());

/// Hash a plaintext password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch and `Err` only when the stored hash is
/// malformed.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(password, hashed)
}

/// Check `password` against `stored`, doing a full-cost verification even
/// when there is no stored hash.
///
/// Unreadable stored hashes count as a mismatch.
pub fn credentials_match(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(hashed) => verify_password(password, hashed).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Stored password hash is unreadable");
            false
        }),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(password, dummy);
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hashed = hash_password("correct-horse").expect("hashing should succeed");

        assert!(hashed.starts_with("$2"), "expected a bcrypt hash");
        assert!(verify_password("correct-horse", &hashed).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        // Minimum cost keeps the test fast; verification reads the cost from the hash.
        let hashed = hash("real-password", 4).unwrap();
        assert!(!verify_password("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn dummy_hash_runs_at_the_default_cost() {
        let dummy = DUMMY_HASH.as_deref().expect("dummy hash should be generated");

        assert!(dummy.starts_with(&format!("$2b${DEFAULT_COST}$")));
        // A well-formed hash means verify does the full key expansion.
        assert_eq!(verify_password("codetech-no-such-account", dummy).ok(), Some(true));
    }

    #[test]
    fn unknown_account_never_matches() {
        assert!(!credentials_match("codetech-no-such-account", None));
        assert!(!credentials_match("", None));
    }

    #[test]
    fn stored_hash_is_checked() {
        let hashed = hash("s3cret-pass", 4).unwrap();

        assert!(credentials_match("s3cret-pass", Some(&hashed)));
        assert!(!credentials_match("other-pass", Some(&hashed)));
        assert!(!credentials_match("s3cret-pass", Some("garbage")));
    }
}
