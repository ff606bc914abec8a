//! Upstream catalog API integration.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::UpstreamClient;
pub use dto::Envelope;
pub use settings::{ResponseFormat, UpstreamConfig};
