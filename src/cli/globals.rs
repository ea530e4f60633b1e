use secrecy::SecretString;

/// Configuration shared across the server: signing secret, credential
/// lifetimes, and the outbound-mail collaborator.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub token_secret: SecretString,
    pub access_ttl_seconds: i64,
    pub refresh_ttl_seconds: i64,
    /// Mail relay endpoint; when unset, OTP messages are logged instead.
    pub mail_relay_url: Option<String>,
    pub mail_from: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(token_secret: SecretString) -> Self {
        Self {
            token_secret,
            access_ttl_seconds: 3600,
            refresh_ttl_seconds: 2_592_000,
            mail_relay_url: None,
            mail_from: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("sekret"));
        assert_eq!(args.token_secret.expose_secret(), "sekret");
        assert_eq!(args.access_ttl_seconds, 3600);
        assert_eq!(args.refresh_ttl_seconds, 2_592_000);
        assert!(args.mail_relay_url.is_none());
    }
}
