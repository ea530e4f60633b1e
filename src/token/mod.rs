//! Stateless session credentials.
//!
//! Every successful authentication mints a pair of signed credentials: a
//! short-lived access token and a longer-lived refresh token. Both carry the
//! same three claims (account id, account-kind label, email) plus `token_use`
//! to keep the two roles apart. Verification is signature + expiry only; no
//! server-side state is involved.

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ACCESS_USE: &str = "access";
const REFRESH_USE: &str = "refresh";

/// Claims carried by both access and refresh credentials.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Account id (UUID string).
    pub sub: String,
    /// Account-kind label as requested at login: "patient", "staff" or
    /// "admin". The admin label resolves to staff storage.
    pub kind: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub token_use: String,
}

impl SessionClaims {
    /// Parse the subject claim back into an account id.
    ///
    /// # Errors
    /// Returns an error when the subject is not a valid UUID.
    pub fn account_id(&self) -> Result<Uuid> {
        self.sub
            .parse::<Uuid>()
            .with_context(|| format!("invalid account id in token subject: {}", self.sub))
    }
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mints and verifies session credentials with a shared HS256 secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl TokenIssuer {
    #[must_use]
    pub fn new(secret: &[u8], access_ttl_seconds: i64, refresh_ttl_seconds: i64) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_ttl_seconds,
            refresh_ttl_seconds,
        }
    }

    /// Mint an access + refresh pair for one authentication event.
    ///
    /// # Errors
    /// Returns an error if signing fails.
    pub fn mint_pair(&self, account_id: Uuid, kind: &str, email: &str) -> Result<TokenPair> {
        let now = Utc::now().timestamp();
        let access_token = self.sign(account_id, kind, email, now, ACCESS_USE)?;
        let refresh_token = self.sign(account_id, kind, email, now, REFRESH_USE)?;
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify an access credential and return its claims.
    ///
    /// # Errors
    /// Returns an error on invalid signature, expiry, or a refresh token
    /// presented where an access token is expected.
    pub fn verify_access(&self, token: &str) -> Result<SessionClaims> {
        let claims = self.verify(token)?;
        if claims.token_use != ACCESS_USE {
            return Err(anyhow!("not an access credential"));
        }
        Ok(claims)
    }

    /// Exchange a valid refresh credential for a new access credential.
    ///
    /// # Errors
    /// Returns an error on invalid signature, expiry, or a non-refresh token.
    pub fn refresh_access(&self, refresh_token: &str) -> Result<String> {
        let claims = self.verify(refresh_token)?;
        if claims.token_use != REFRESH_USE {
            return Err(anyhow!("not a refresh credential"));
        }
        let account_id = claims.account_id()?;
        let now = Utc::now().timestamp();
        self.sign(account_id, &claims.kind, &claims.email, now, ACCESS_USE)
    }

    fn sign(
        &self,
        account_id: Uuid,
        kind: &str,
        email: &str,
        now: i64,
        token_use: &str,
    ) -> Result<String> {
        let ttl = if token_use == REFRESH_USE {
            self.refresh_ttl_seconds
        } else {
            self.access_ttl_seconds
        };
        let claims = SessionClaims {
            sub: account_id.to_string(),
            kind: kind.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + ttl,
            token_use: token_use.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .context("failed to sign session credential")
    }

    fn verify(&self, token: &str) -> Result<SessionClaims> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .context("invalid session credential")?;
        Ok(data.claims)
    }
}
