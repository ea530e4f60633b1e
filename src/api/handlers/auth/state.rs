//! Shared state handed to the auth handlers via `Extension`.

use std::sync::Arc;

use crate::api::notify::Notifier;
use crate::token::TokenIssuer;

use super::store::OtpStore;

#[derive(Clone)]
pub struct AuthState {
    tokens: Arc<TokenIssuer>,
    notifier: Arc<dyn Notifier>,
    otp_store: Arc<dyn OtpStore>,
}

impl AuthState {
    pub fn new(
        tokens: TokenIssuer,
        notifier: Arc<dyn Notifier>,
        otp_store: Arc<dyn OtpStore>,
    ) -> Self {
        Self {
            tokens: Arc::new(tokens),
            notifier,
            otp_store,
        }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn otp_store(&self) -> &dyn OtpStore {
        self.otp_store.as_ref()
    }
}
