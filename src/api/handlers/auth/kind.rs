//! Account kinds and storage namespaces.
//!
//! Flow Overview:
//! - `patient` and `staff` are real storage namespaces.
//! - `admin` is a login-time label: it resolves to the staff namespace for
//!   account lookups but keeps its own OTP namespace and its own label in
//!   issued credentials, so a staff member may hold pending `staff` and
//!   `admin` codes at the same time.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-facing account kind, as carried in `user_type` fields and token
/// claims.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Patient,
    Staff,
    Admin,
}

/// Storage namespace an account kind resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Namespace {
    Patient,
    Staff,
}

impl AccountKind {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value {
            "patient" => Some(Self::Patient),
            "staff" => Some(Self::Staff),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }

    /// Namespace used for account lookups; `admin` maps to staff.
    #[must_use]
    pub const fn namespace(self) -> Namespace {
        match self {
            Self::Patient => Namespace::Patient,
            Self::Staff | Self::Admin => Namespace::Staff,
        }
    }
}

impl Namespace {
    pub(crate) const fn not_found_message(self) -> &'static str {
        match self {
            Self::Patient => "Patient not found",
            Self::Staff => "Staff not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountKind, Namespace};

    #[test]
    fn parse_accepts_known_kinds() {
        assert_eq!(AccountKind::parse("patient"), Some(AccountKind::Patient));
        assert_eq!(AccountKind::parse("staff"), Some(AccountKind::Staff));
        assert_eq!(AccountKind::parse("admin"), Some(AccountKind::Admin));
    }

    #[test]
    fn parse_rejects_unknown_kinds() {
        assert_eq!(AccountKind::parse("doctor"), None);
        assert_eq!(AccountKind::parse(""), None);
        assert_eq!(AccountKind::parse("Patient"), None);
    }

    #[test]
    fn admin_resolves_to_staff_namespace() {
        assert_eq!(AccountKind::Admin.namespace(), Namespace::Staff);
        assert_eq!(AccountKind::Staff.namespace(), Namespace::Staff);
        assert_eq!(AccountKind::Patient.namespace(), Namespace::Patient);
    }

    #[test]
    fn as_str_keeps_the_admin_label() {
        assert_eq!(AccountKind::Admin.as_str(), "admin");
    }

    #[test]
    fn kind_round_trips_through_serde() {
        let value = serde_json::to_value(AccountKind::Admin).ok();
        assert_eq!(value, Some(serde_json::json!("admin")));
        let parsed: Option<AccountKind> = serde_json::from_str("\"staff\"").ok();
        assert_eq!(parsed, Some(AccountKind::Staff));
    }
}
