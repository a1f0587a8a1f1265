//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the café directory and domain ports, and remain testable without
//! I/O.

use std::sync::Arc;

use crate::domain::CafeDirectory;
use crate::domain::ports::{MailRelay, PageRenderer};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Startup snapshot of the café table.
    pub cafes: Arc<CafeDirectory>,
    /// Relay for contact and suggestion notifications.
    pub mail: Arc<dyn MailRelay>,
    /// Page renderer.
    pub renderer: Arc<dyn PageRenderer>,
}

impl HttpState {
    /// Construct state from its ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use cafe_directory::domain::CafeDirectory;
    /// use cafe_directory::domain::ports::{
    ///     FixtureCafeRepository, FixtureMailRelay, FixturePageRenderer,
    /// };
    /// use cafe_directory::inbound::http::state::HttpState;
    ///
    /// # async fn build() -> Result<(), Box<dyn std::error::Error>> {
    /// let cafes = CafeDirectory::load(Arc::new(FixtureCafeRepository::default())).await?;
    /// let state = HttpState::new(
    ///     Arc::new(cafes),
    ///     Arc::new(FixtureMailRelay),
    ///     Arc::new(FixturePageRenderer),
    /// );
    /// assert!(state.cafes.all().is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        cafes: Arc<CafeDirectory>,
        mail: Arc<dyn MailRelay>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            cafes,
            mail,
            renderer,
        }
    }
}
