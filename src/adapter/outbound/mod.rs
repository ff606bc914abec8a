//! Outbound adapters (driven side).

pub mod upstream;
