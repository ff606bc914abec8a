//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`catalog`] — `StaticCatalog`, an in-memory
//!   [`CatalogSource`](crate::port::CatalogSource) with scripted results.
//! - [`domain`] — Builders for products, sales, and enriched sales.

pub mod catalog;
pub mod domain;
