//! Small helpers for auth validation and password hashing.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use regex::Regex;

/// Normalize an email for lookup/uniqueness checks.
pub(super) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
pub(super) fn valid_email(email_normalized: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email_normalized))
}

/// Mobile numbers: digits with an optional leading `+`, 7 to 15 digits.
pub(super) fn valid_mobile(mobile: &str) -> bool {
    Regex::new(r"^\+?[0-9]{7,15}$").is_ok_and(|regex| regex.is_match(mobile))
}

/// Argon2id tuned for interactive logins: moderate memory, single iteration.
fn password_hasher() -> Argon2<'static> {
    const MEMORY_COST_KIB: u32 = 768;
    const ITERATIONS: u32 = 1;
    const PARALLELISM: u32 = 1;
    let params = Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, Some(32))
        .expect("valid Argon2 parameters");
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}

/// Hash a password with a fresh random salt, returning a PHC string.
pub(super) fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    password_hasher()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| anyhow!("failed to hash password: {err}"))
}

/// Check a password against a stored PHC hash. Malformed hashes fail closed.
pub(super) fn verify_password_hash(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash).is_ok_and(|parsed| {
        password_hasher()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

pub(super) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email(" Jane@Example.COM "), "jane@example.com");
    }

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@example.com"));
        assert!(valid_email("name.surname@example.co"));
    }

    #[test]
    fn valid_email_rejects_missing_parts() {
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("missing-at.example.com"));
        assert!(!valid_email("missing-domain@"));
    }

    #[test]
    fn valid_mobile_accepts_digits_and_plus() {
        assert!(valid_mobile("9990001111"));
        assert!(valid_mobile("+449990001111"));
    }

    #[test]
    fn valid_mobile_rejects_garbage() {
        assert!(!valid_mobile("12345"));
        assert!(!valid_mobile("phone-number"));
        assert!(!valid_mobile("999 000 1111"));
    }

    #[test]
    fn hash_password_verifies_round_trip() -> anyhow::Result<()> {
        let hash = hash_password("Secret1")?;
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password_hash("Secret1", &hash));
        assert!(!verify_password_hash("Secret2", &hash));
        Ok(())
    }

    #[test]
    fn hash_password_salts_every_call() -> anyhow::Result<()> {
        let first = hash_password("Secret1")?;
        let second = hash_password("Secret1")?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn verify_password_hash_fails_closed_on_garbage() {
        assert!(!verify_password_hash("Secret1", "not-a-phc-string"));
    }

    #[derive(Debug)]
    struct TestDbError {
        code: Option<&'static str>,
    }

    impl fmt::Display for TestDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "test database error")
        }
    }

    impl StdError for TestDbError {}

    impl DatabaseError for TestDbError {
        fn message(&self) -> &'static str {
            "test database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn is_unique_violation_matches_sqlstate() {
        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("23505"),
        }));
        assert!(is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("99999"),
        }));
        assert!(!is_unique_violation(&err));

        let err = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation(&err));
    }
}
