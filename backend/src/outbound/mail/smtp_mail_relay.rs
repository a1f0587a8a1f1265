//! SMTP-backed `MailRelay` using `lettre`.
//!
//! The transport is built without a connection pool: every `send` opens a
//! connection, upgrades it with STARTTLS, authenticates, submits one message
//! and closes it again, whichever step fails.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::AsyncSmtpTransportBuilder;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::domain::MailMessage;
use crate::domain::ports::{MailRelay, MailRelayError};

use super::credentials::MailCredentials;

/// Where and how long to talk to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpRelayConfig {
    /// Relay host name.
    pub host: String,
    /// Submission port.
    pub port: u16,
    /// Upper bound on each network operation.
    pub timeout: Duration,
}

/// `MailRelay` adapter speaking SMTP with mandatory STARTTLS.
#[derive(Clone)]
pub struct SmtpMailRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    timeout: Duration,
}

impl SmtpMailRelay {
    /// Build a relay that sends from and to `credentials.email()`.
    ///
    /// No connection is opened here.
    ///
    /// # Errors
    /// Returns [`MailRelayError::Message`] when the sender address does not
    /// parse and [`MailRelayError::Transport`] when the relay host is
    /// rejected.
    pub fn new(
        config: &SmtpRelayConfig,
        credentials: &MailCredentials,
    ) -> Result<Self, MailRelayError> {
        let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|err| MailRelayError::transport(err.to_string()))?;
        Self::from_builder(builder, config, credentials)
    }

    /// Plaintext relay for talking to a scripted local peer.
    #[cfg(test)]
    fn without_tls(
        config: &SmtpRelayConfig,
        credentials: &MailCredentials,
    ) -> Result<Self, MailRelayError> {
        let builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host);
        Self::from_builder(builder, config, credentials)
    }

    fn from_builder(
        builder: AsyncSmtpTransportBuilder,
        config: &SmtpRelayConfig,
        credentials: &MailCredentials,
    ) -> Result<Self, MailRelayError> {
        let sender: Mailbox = credentials
            .email()
            .parse()
            .map_err(|err| MailRelayError::message(format!("invalid sender address: {err}")))?;
        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                credentials.email().to_owned(),
                credentials.password().to_owned(),
            ))
            .timeout(Some(config.timeout))
            .build();
        Ok(Self {
            transport,
            sender,
            timeout: config.timeout,
        })
    }

    fn build_message(&self, message: &MailMessage) -> Result<Message, MailRelayError> {
        Message::builder()
            .from(self.sender.clone())
            .to(self.sender.clone())
            .subject(message.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body())
            .map_err(|err| MailRelayError::message(err.to_string()))
    }
}

#[async_trait]
impl MailRelay for SmtpMailRelay {
    async fn send(&self, message: &MailMessage) -> Result<(), MailRelayError> {
        let email = self.build_message(message)?;
        // The transport timeout covers connecting; this bounds the whole attempt.
        let response = tokio::time::timeout(self.timeout, self.transport.send(email))
            .await
            .map_err(|_| {
                MailRelayError::transport(format!(
                    "relay did not finish within {}s",
                    self.timeout.as_secs_f32()
                ))
            })?
            .map_err(|err| MailRelayError::transport(err.to_string()))?;
        debug!(code = %response.code(), subject = message.subject(), "mail relayed");
        Ok(())
    }
}

/// Relay used when no credentials are configured; every send fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredMailRelay;

#[async_trait]
impl MailRelay for UnconfiguredMailRelay {
    async fn send(&self, _message: &MailMessage) -> Result<(), MailRelayError> {
        Err(MailRelayError::transport("mail relay is not configured"))
    }
}
