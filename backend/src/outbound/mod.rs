//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: SQLite-backed café repository using Diesel
//! - **mail**: SMTP relay for contact messages and café suggestions
//! - **templates**: MiniJinja page renderer over the embedded site templates
//!
//! Adapters translate between domain types and infrastructure representations.
//! They contain no business logic.

pub mod mail;
pub mod persistence;
pub mod templates;
