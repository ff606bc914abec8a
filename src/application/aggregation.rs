//! Fan-out/join of per-product sales into one enriched sale list.
//!
//! One aggregation pass fetches the product list, then issues one sale fetch
//! per product through a bounded task group and waits for every branch to
//! settle. Each branch owns its failure: a failed branch contributes no
//! records and is reported in [`UnifiedSales::failed_products`]. Only a
//! failed product listing fails the whole pass.

use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{EnrichedSale, Product, ProductId, SaleRecord};
use crate::error::FetchResult;
use crate::port::outbound::catalog::CatalogSource;

/// Default limit on concurrent per-product sale fetches.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// The joined result of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedSales {
    /// Enriched sales in branch completion order; upstream order within a product.
    pub sales: Vec<EnrichedSale>,
    /// Products whose sale fetch failed and whose sales are therefore missing.
    pub failed_products: Vec<ProductId>,
    /// Number of products the pass fanned out over.
    pub product_count: usize,
}

impl UnifiedSales {
    /// True when every per-product fetch succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed_products.is_empty()
    }
}

/// Joins products with their sales through a [`CatalogSource`].
pub struct SalesAggregator<'a> {
    source: &'a dyn CatalogSource,
    max_concurrency: usize,
}

impl<'a> SalesAggregator<'a> {
    #[must_use]
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self {
            source,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Limit the number of sale fetches in flight. Zero is treated as one.
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Build the unified enriched sale list for every product.
    ///
    /// # Errors
    ///
    /// Returns the product-listing failure unchanged. Per-product sale
    /// failures never fail the pass.
    pub async fn fetch_all_enriched_sales(&self) -> FetchResult<UnifiedSales> {
        let products = self.source.fetch_products().await?;
        info!(
            source = self.source.source_name(),
            products = products.len(),
            max_concurrency = self.max_concurrency,
            "Aggregating product sales"
        );

        let branches: Vec<(&Product, FetchResult<Vec<SaleRecord>>)> = stream::iter(&products)
            .map(|product| async move {
                let sales = self.source.fetch_product_sales(product.id).await;
                (product, sales)
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        let mut unified = UnifiedSales {
            product_count: products.len(),
            ..Default::default()
        };
        for (product, outcome) in branches {
            match outcome {
                Ok(records) => unified.sales.extend(enrich(product, records)),
                Err(err) => {
                    warn!(
                        product_id = %product.id,
                        error = %err,
                        detail = err.detail(),
                        "Sale fetch failed, omitting product from aggregation"
                    );
                    unified.failed_products.push(product.id);
                }
            }
        }

        info!(
            sales = unified.sales.len(),
            failed = unified.failed_products.len(),
            "Aggregation complete"
        );
        Ok(unified)
    }
}

/// Enrich one product's batch, keeping upstream order.
///
/// Records that reference a different product are dropped, so every enriched
/// sale points at a product of the same pass.
fn enrich(product: &Product, records: Vec<SaleRecord>) -> Vec<EnrichedSale> {
    let total = records.len();
    let enriched: Vec<EnrichedSale> = records
        .into_iter()
        .filter(|record| record.product_id == product.id)
        .map(|record| EnrichedSale::from_record(record, product))
        .collect();
    if enriched.len() < total {
        debug!(
            product_id = %product.id,
            dropped = total - enriched.len(),
            "Dropped sales referencing another product"
        );
    }
    enriched
}
