//! Domain primitives, the in-memory café directory and its ports.
//!
//! Purpose: keep café data, visitor submissions and notification layout free
//! of HTTP, SQL and SMTP concerns. Adapters live under `inbound` and
//! `outbound` and talk to the domain through [`ports`].
//!
//! Public surface:
//! - [`Cafe`] / [`CafeId`]: one directory entry.
//! - [`CafeDirectory`]: startup snapshot with lookup by id.
//! - [`ContactMessage`], [`CafeSuggestion`], [`Availability`]: validated
//!   submissions.
//! - [`MailMessage`] / [`MailField`]: plain-text notification.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`TraceId`]: per-request correlation identifier.

pub mod cafe;
pub mod directory;
pub mod error;
pub mod mail;
pub mod ports;
pub mod submissions;
#[cfg(test)]
pub(crate) mod test_support;
pub mod trace_id;

pub use self::cafe::{Cafe, CafeId};
pub use self::directory::CafeDirectory;
pub use self::error::{Error, ErrorCode};
pub use self::mail::{MailField, MailMessage};
pub use self::submissions::{Availability, CafeSuggestion, ContactMessage, UnknownAvailability};
pub use self::trace_id::TraceId;

/// HTTP header carrying the trace identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";
