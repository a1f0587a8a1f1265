//! Short, stable fingerprint of the session cookie key.
//!
//! Logged once at startup so operators can tell whether two instances (or a
//! restart) derived the same key from `SECRET_KEY`. Only a digest of the
//! signing half is exposed; the key itself never reaches a log line.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

/// Digest bytes kept; hex encoding doubles the length.
const FINGERPRINT_BYTES: usize = 8;

/// Hex-encode the first [`FINGERPRINT_BYTES`] of `SHA-256(key.signing())`.
///
/// # Examples
///
/// ```rust
/// use actix_web::cookie::Key;
/// use cafe_directory::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let key = Key::derive_from(&[7u8; 64]);
/// assert_eq!(key_fingerprint(&key), key_fingerprint(&key.clone()));
/// assert_eq!(key_fingerprint(&key).len(), 16);
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    let prefix: Vec<u8> = digest.iter().copied().take(FINGERPRINT_BYTES).collect();
    hex::encode(prefix)
}
