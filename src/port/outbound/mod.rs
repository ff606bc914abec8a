//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the upstream catalog dependency.

pub mod catalog;
