//! Server settings loaded via OrthoConfig.
//!
//! Non-secret knobs are layered from defaults, an optional config file,
//! `CAFES_*` environment variables and CLI flags. Secrets use unprefixed
//! environment names and are read by the adapters that own them
//! (`SECRET_KEY`, `EMAIL`, `EMAIL_PASS`, `DATABASE_URL`).

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 4;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Build mode for configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate missing secrets and emit warnings.
    Debug,
    /// Release builds require every secret to be present and valid.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cafe_directory::settings::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    /// Whether defaults and warnings replace hard failures.
    #[must_use]
    pub fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not `host:port`.
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        /// Offending value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration values controlling the HTTP server, café store pool and
/// mail transport.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAFES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// SMTP relay host.
    pub smtp_host: Option<String>,
    /// SMTP relay submission port (STARTTLS).
    pub smtp_port: Option<u16>,
    /// Upper bound on one relay attempt, in seconds.
    pub smtp_timeout_secs: Option<u64>,
    /// Upper bound on pooled SQLite connections.
    pub db_max_connections: Option<u32>,
    /// How long a request may wait for a pooled connection, in seconds.
    pub db_connect_timeout_secs: Option<u64>,
    /// Mark session cookies `Secure`.
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// Mount the administrative delete route.
    #[ortho_config(default = false)]
    pub enable_delete: bool,
}

impl ServerSettings {
    /// Parsed listen address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the configured value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// SMTP host, falling back to the default.
    pub fn smtp_host(&self) -> &str {
        self.smtp_host.as_deref().unwrap_or(DEFAULT_SMTP_HOST)
    }

    /// SMTP port, falling back to the default.
    pub fn smtp_port(&self) -> u16 {
        self.smtp_port.unwrap_or(DEFAULT_SMTP_PORT)
    }

    /// Relay timeout, falling back to the default.
    pub fn smtp_timeout(&self) -> Duration {
        Duration::from_secs(self.smtp_timeout_secs.unwrap_or(DEFAULT_SMTP_TIMEOUT_SECS))
    }

    /// Pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Pool checkout timeout, falling back to the default.
    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connect_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
        )
    }
}
