//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cafe_repository;
mod mail_relay;
mod page_renderer;

#[cfg(test)]
pub use cafe_repository::MockCafeRepository;
pub use cafe_repository::{CafeRepository, CafeRepositoryError, FixtureCafeRepository};
#[cfg(test)]
pub use mail_relay::MockMailRelay;
pub use mail_relay::{FixtureMailRelay, MailRelay, MailRelayError};
#[cfg(test)]
pub use page_renderer::MockPageRenderer;
pub use page_renderer::{
    FixturePageRenderer, Page, PageRenderer, PageRendererError, PageTemplate,
};
