//! Sender identity for the SMTP relay.
//!
//! `EMAIL` is both the SMTP login and the From/To address of every
//! notification; `EMAIL_PASS` is its secret. The secret lives in a
//! [`Zeroizing`] buffer and is redacted from `Debug` output.

use std::fmt;

use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

use crate::settings::BuildMode;

pub(crate) const EMAIL_ENV: &str = "EMAIL";
pub(crate) const EMAIL_PASS_ENV: &str = "EMAIL_PASS";

/// Errors raised while reading mail credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailCredentialsError {
    /// A required environment variable is missing or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
}

/// Mailbox address and secret used to authenticate with the relay.
#[derive(Clone)]
pub struct MailCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl MailCredentials {
    /// Pair a sender address with its secret.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Sender address.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read `EMAIL` and `EMAIL_PASS`.
///
/// Release builds require both. Debug builds return `None` with a warning so
/// the site can run locally without a mailbox; submissions then fail with a
/// delivery notice.
///
/// # Errors
/// Returns [`MailCredentialsError::MissingEnv`] in release builds when either
/// variable is missing or blank.
pub fn mail_credentials_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<Option<MailCredentials>, MailCredentialsError> {
    let email = non_blank(env, EMAIL_ENV);
    let password = non_blank(env, EMAIL_PASS_ENV).map(Zeroizing::new);

    match (email, password) {
        (Some(email), Some(password)) => Ok(Some(MailCredentials { email, password })),
        (email, _) => {
            let name = if email.is_none() {
                EMAIL_ENV
            } else {
                EMAIL_PASS_ENV
            };
            if mode.is_debug() {
                warn!(name, "mail credentials incomplete; relay disabled (dev only)");
                Ok(None)
            } else {
                Err(MailCredentialsError::MissingEnv { name })
            }
        }
    }
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name).filter(|value| !value.trim().is_empty())
}
