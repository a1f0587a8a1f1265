//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The only state the site keeps between requests is a one-shot flash notice
//! set before a post-redirect-get and consumed by the next page render.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Error;

pub(crate) const FLASH_KEY: &str = "flash";

/// Notices shown once on the page a visitor is redirected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The contact message was relayed.
    Sent,
    /// The relay failed; the visitor should try again later.
    DeliveryFailed,
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `notice` for the next request.
    pub fn flash(&self, notice: Notice) -> Result<(), Error> {
        self.0
            .insert(FLASH_KEY, notice)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Remove and return the pending notice, if any.
    ///
    /// A notice that no longer deserialises is dropped with a warning rather
    /// than failing the page.
    pub fn take_notice(&self) -> Option<Notice> {
        match self.0.remove_as::<Notice>(FLASH_KEY) {
            Some(Ok(notice)) => Some(notice),
            Some(Err(raw)) => {
                warn!(raw = %raw, "discarding unreadable flash notice");
                None
            }
            None => None,
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
