//! Salescope - product and sales catalog aggregation.
//!
//! Fetches products and per-product sales from an upstream REST API, joins
//! them into one enriched sale list, and filters and paginates that list for
//! display.
//!
//! # Modules
//!
//! - [`domain`] - Products, sale records, enriched sales, and totals
//! - [`port`] - The [`CatalogSource`](port::CatalogSource) trait
//! - [`application`] - Aggregation fan-out, summaries, filtering, pagination
//! - [`adapter`] - Upstream REST client, CLI, and HTTP proxy
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use salescope::adapter::outbound::upstream::UpstreamClient;
//! use salescope::application::query::{SaleFilter, SalesView};
//! use salescope::application::SalesAggregator;
//!
//! # async fn example() -> salescope::error::Result<()> {
//! let client = UpstreamClient::new("http://localhost:5250");
//! let unified = SalesAggregator::new(&client).fetch_all_enriched_sales().await?;
//! let page = SalesView::default()
//!     .with_filter(SaleFilter::default())
//!     .render(&unified.sales);
//! println!("{} of {} sales", page.items.len(), page.total_items);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
