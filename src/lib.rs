//! # Medigate (Hospital Authentication Service)
//!
//! `medigate` is the authentication authority for a hospital-management
//! backend. It implements the two-factor (password + email OTP) flows for
//! three account kinds and issues stateless signed session credentials.
//!
//! ## Account Kinds
//!
//! - **patient**: self-registered accounts with email verification.
//! - **staff**: provisioned by an admin; carries a role with named boolean
//!   permissions.
//! - **admin**: a login-time label for staff whose role has
//!   `is_admin = true`. Storage resolves `admin` to the staff namespace, but
//!   OTP state and token claims keep the `admin` label.
//!
//! ## OTP Semantics
//!
//! One OTP row exists per `(email, account kind)` pair. Requesting a code
//! overwrites the previous one unconditionally; there is no expiry window and
//! no single-use invalidation, so a verified code stays valid until the next
//! request replaces it. Codes are always written to storage before delivery
//! is attempted, so a stored code remains verifiable even when the notifier
//! fails.
//!
//! ## Session Credentials
//!
//! Each successful authentication mints an access + refresh JWT pair carrying
//! the account id, the requested account-kind label, and the email. Protected
//! endpoints verify signature and expiry only; resolving the full account is
//! an explicit database step in each handler.

pub mod api;
pub mod cli;
pub mod token;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
