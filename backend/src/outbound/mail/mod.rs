//! Mail relay adapters.

mod credentials;
mod smtp_mail_relay;

pub use credentials::{MailCredentials, MailCredentialsError, mail_credentials_from_env};
pub use smtp_mail_relay::{SmtpMailRelay, SmtpRelayConfig, UnconfiguredMailRelay};
