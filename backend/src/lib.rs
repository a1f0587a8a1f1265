//! Café directory library modules.
//!
//! The binary in `main.rs` wires these together; integration tests build the
//! same application from them.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
