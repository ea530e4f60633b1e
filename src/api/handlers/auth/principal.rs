//! Bearer credential extraction for protected routes.

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use uuid::Uuid;

use crate::token::TokenIssuer;

use super::kind::AccountKind;

/// Authenticated caller resolved from an access credential.
#[derive(Debug, Clone)]
pub(super) struct Principal {
    pub account_id: Uuid,
    pub kind: AccountKind,
    pub email: String,
}

const UNAUTHORIZED: (StatusCode, &str) = (StatusCode::UNAUTHORIZED, "Invalid or missing token");

/// Resolve the caller from the `Authorization: Bearer` header.
pub(super) fn authenticate(
    tokens: &TokenIssuer,
    headers: &HeaderMap,
) -> Result<Principal, (StatusCode, String)> {
    let unauthorized = || (UNAUTHORIZED.0, UNAUTHORIZED.1.to_string());

    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(unauthorized)?;

    let token = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

    let claims = tokens.verify_access(token).map_err(|_| unauthorized())?;
    let account_id = claims.account_id().map_err(|_| unauthorized())?;
    let kind = AccountKind::parse(&claims.kind).ok_or_else(unauthorized)?;

    Ok(Principal {
        account_id,
        kind,
        email: claims.email,
    })
}
