//! Inbound adapters that translate external requests into domain calls while
//! keeping framework details at the edge.
//!
//! The site is served over HTTP only; see [`http`].

pub mod http;
