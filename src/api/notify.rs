//! Outbound OTP delivery abstractions.
//!
//! Delivery is an external collaborator: the auth flow writes the code to
//! storage first and only then hands the message to a `Notifier`. A failed
//! delivery surfaces as an error for the request, but the stored code stays
//! verifiable.
//!
//! The default sender for local dev is `LogNotifier`, which logs and returns
//! `Ok(())`. Production deployments configure `HttpNotifier` with a mail
//! relay endpoint.

use anyhow::{anyhow, Context, Result};
use serde_json::json;
use std::{future::Future, pin::Pin, time::Duration};
use tracing::info;
use url::Url;

const RELAY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct OtpMessage {
    pub to_email: String,
    pub subject: String,
    pub body: String,
}

/// Email delivery abstraction used by the auth flow.
pub trait Notifier: Send + Sync {
    /// Deliver a message or return an error to fail the request.
    fn send<'a>(
        &'a self,
        message: &'a OtpMessage,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Local dev sender that logs the payload instead of sending real email.
#[derive(Clone, Debug)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send<'a>(
        &'a self,
        message: &'a OtpMessage,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            info!(
                to_email = %message.to_email,
                subject = %message.subject,
                body = %message.body,
                "otp delivery stub"
            );
            Ok(())
        })
    }
}

/// Posts messages as JSON to a mail relay with a bounded request timeout.
#[derive(Clone, Debug)]
pub struct HttpNotifier {
    client: reqwest::Client,
    url: String,
    from: String,
}

impl HttpNotifier {
    /// Build a relay-backed notifier.
    ///
    /// # Errors
    /// Returns an error when the relay URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(url: &str, from: &str) -> Result<Self> {
        Url::parse(url).with_context(|| format!("invalid mail relay URL: {url}"))?;
        let client = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(RELAY_TIMEOUT)
            .build()
            .context("failed to build mail relay client")?;
        Ok(Self {
            client,
            url: url.to_string(),
            from: from.to_string(),
        })
    }
}

impl Notifier for HttpNotifier {
    fn send<'a>(
        &'a self,
        message: &'a OtpMessage,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let payload = json!({
                "from": self.from,
                "to": message.to_email,
                "subject": message.subject,
                "body": message.body,
            });
            let response = self
                .client
                .post(&self.url)
                .json(&payload)
                .send()
                .await
                .context("mail relay request failed")?;

            let status = response.status();
            if !status.is_success() {
                return Err(anyhow!("mail relay rejected message: {status}"));
            }
            Ok(())
        })
    }
}
