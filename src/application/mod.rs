//! Application services: aggregation, summaries, and sale queries.
//!
//! Depends on domain types and the [`CatalogSource`](crate::port::CatalogSource)
//! port only; concrete adapters are injected by the caller.

pub mod aggregation;
pub mod query;
pub mod summary;

pub use aggregation::{SalesAggregator, UnifiedSales, DEFAULT_MAX_CONCURRENCY};
pub use summary::{product_summary, summary_or_zero};
