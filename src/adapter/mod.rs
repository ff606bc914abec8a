//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] drives the application (CLI, HTTP proxy).
//! - [`outbound`] is driven by it (the upstream catalog client).

pub mod inbound;
pub mod outbound;
