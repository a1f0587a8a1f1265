//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use std::net::SocketAddr;

use cafe_directory::inbound::http::session_config::SessionSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) enable_delete: bool,
}

impl ServerConfig {
    /// Construct a server configuration from validated session settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
            ephemeral: _,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            enable_delete: false,
        }
    }

    /// Mount the administrative delete route.
    #[must_use]
    pub fn with_delete_route(mut self, enabled: bool) -> Self {
        self.enable_delete = enabled;
        self
    }
}
