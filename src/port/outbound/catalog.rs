//! Catalog source port for product and sale data.
//!
//! Defines the read-only interface the aggregation layer uses to pull
//! products and their sales from the upstream service.

use async_trait::async_trait;

use crate::domain::{Product, ProductId, SaleRecord, SaleTotals};
use crate::error::FetchResult;

/// Read-only source of catalog data.
///
/// Every method returns a [`FetchResult`]: transport, protocol, and payload
/// failures are converted into values and never escape as panics.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one source can serve the
/// concurrent per-product fetches of an aggregation pass.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Return the source name for logging.
    fn source_name(&self) -> &'static str;

    /// Fetch every product in the catalog.
    async fn fetch_products(&self) -> FetchResult<Vec<Product>>;

    /// Fetch the raw sales of one product, in upstream order.
    ///
    /// The id is not validated locally; an unknown id yields an empty batch.
    async fn fetch_product_sales(&self, product_id: ProductId) -> FetchResult<Vec<SaleRecord>>;

    /// Fetch one product's sales and fold them into totals.
    async fn fetch_sale_totals(&self, product_id: ProductId) -> FetchResult<SaleTotals> {
        let sales = self.fetch_product_sales(product_id).await?;
        Ok(SaleTotals::from_records(&sales))
    }
}
