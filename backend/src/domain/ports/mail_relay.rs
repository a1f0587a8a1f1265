//! Port for relaying notifications through an external mail transport.
//!
//! One call is one complete attempt: connect, secure, authenticate, submit,
//! disconnect. There is no retry and no partial success; adapters collapse
//! every transport failure into [`MailRelayError`] and leave user-visible
//! behaviour to the caller.

use async_trait::async_trait;

use crate::domain::MailMessage;

use super::define_port_error;

define_port_error! {
    /// Errors raised by mail relay adapters.
    pub enum MailRelayError {
        /// The message could not be assembled (bad address, header, ...).
        Message { message: String } =>
            "mail message could not be built: {message}",
        /// Connecting, securing, authenticating or submitting failed.
        Transport { message: String } =>
            "mail transport failed: {message}",
    }
}

/// Port for sending one notification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Send `message` to the configured site mailbox.
    async fn send(&self, message: &MailMessage) -> Result<(), MailRelayError>;
}

/// Fixture relay that accepts and drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMailRelay;

#[async_trait]
impl MailRelay for FixtureMailRelay {
    async fn send(&self, _message: &MailMessage) -> Result<(), MailRelayError> {
        Ok(())
    }
}
