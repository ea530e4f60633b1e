//! Auth handlers and supporting modules.
//!
//! This module coordinates two-factor sign-in for the three account kinds:
//! a password check followed by an emailed one-time code. Patients register
//! themselves (email verification first); staff accounts are onboarded by an
//! admin and receive their first login code by email.
//!
//! ## One-Time Codes
//!
//! Codes are keyed by `(email, kind)`. Requesting a new code replaces the
//! pending one and resets its verified flag, so only the latest code counts.
//! `admin` logins keep their own code namespace even though the account lives
//! in the staff table.

pub(crate) mod kind;
pub(crate) mod login;
pub(crate) mod otp;
pub(crate) mod password;
mod principal;
pub(crate) mod registration;
pub(crate) mod session;
pub(crate) mod staff;
mod state;
mod storage;
mod store;
pub(crate) mod types;
mod utils;

pub use state::AuthState;
pub use store::PgOtpStore;
