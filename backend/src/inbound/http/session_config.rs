//! Session cookie configuration.
//!
//! The cookie key is derived from the `SECRET_KEY` environment variable. The
//! secret is read through [`mockable::Env`] so every branch is unit testable,
//! and the raw bytes are wiped once the key is derived.

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

use crate::settings::BuildMode;

pub mod fingerprint;

pub(crate) const SECRET_KEY_ENV: &str = "SECRET_KEY";
/// Minimum secret length accepted in release builds.
pub const SECRET_KEY_MIN_LEN: usize = 64;
/// Shortest secret [`Key::derive_from`] accepts.
const DERIVE_MIN_LEN: usize = 32;

/// Session settings derived from configuration.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
    /// Whether `key` is a throwaway generated for this process.
    pub ephemeral: bool,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// The secret is too short for the current build mode.
    #[error("{name} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        name: &'static str,
        length: usize,
        min_len: usize,
    },
}

/// Build session settings from `SECRET_KEY` and the configured cookie flag.
///
/// Release builds require a secret of at least [`SECRET_KEY_MIN_LEN`] bytes.
/// Debug builds fall back to an ephemeral key, with a warning, when the secret
/// is missing or too short to derive from.
///
/// # Examples
///
/// ```rust
/// use cafe_directory::inbound::http::session_config::session_settings_from_env;
/// use cafe_directory::settings::BuildMode;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string()
///     .returning(|name| (name == "SECRET_KEY").then(|| "k".repeat(64)));
///
/// let settings = session_settings_from_env(&env, BuildMode::Release, true)
///     .expect("valid secret");
/// assert!(settings.cookie_secure);
/// assert!(!settings.ephemeral);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SessionSettings, SessionConfigError> {
    let (key, ephemeral) = session_key_from_env(env, mode)?;
    if !cookie_secure && !mode.is_debug() {
        warn!("session cookies are not marked Secure");
    }
    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site: SameSite::Lax,
        ephemeral,
    })
}

fn session_key_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<(Key, bool), SessionConfigError> {
    let Some(secret) = env.string(SECRET_KEY_ENV).map(Zeroizing::new) else {
        if mode.is_debug() {
            warn!("SECRET_KEY not set; using temporary session key (dev only)");
            return Ok((Key::generate(), true));
        }
        return Err(SessionConfigError::MissingEnv {
            name: SECRET_KEY_ENV,
        });
    };

    let length = secret.len();
    let min_len = if mode.is_debug() {
        DERIVE_MIN_LEN
    } else {
        SECRET_KEY_MIN_LEN
    };
    if length < min_len {
        if mode.is_debug() {
            warn!(
                length,
                min_len, "SECRET_KEY too short; using temporary session key (dev only)"
            );
            return Ok((Key::generate(), true));
        }
        return Err(SessionConfigError::KeyTooShort {
            name: SECRET_KEY_ENV,
            length,
            min_len,
        });
    }

    Ok((Key::derive_from(secret.as_bytes()), false))
}
