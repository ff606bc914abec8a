//! Per-product summary lookups.

use tracing::warn;

use crate::domain::{Product, ProductSummary};
use crate::error::{FetchError, FetchResult};
use crate::port::outbound::catalog::CatalogSource;

/// Fetch a product's sales and summarize them under its description.
///
/// # Errors
///
/// Propagates the sale fetch failure unchanged.
pub async fn product_summary(
    source: &dyn CatalogSource,
    product: &Product,
) -> FetchResult<ProductSummary> {
    let totals = source.fetch_sale_totals(product.id).await?;
    Ok(ProductSummary::new(product.description.clone(), totals))
}

/// Like [`product_summary`], but falls back to zero totals on failure.
///
/// The failure is logged and handed back next to the zero summary.
pub async fn summary_or_zero(
    source: &dyn CatalogSource,
    product: &Product,
) -> (ProductSummary, Option<FetchError>) {
    match product_summary(source, product).await {
        Ok(summary) => (summary, None),
        Err(err) => {
            warn!(
                product_id = %product.id,
                error = %err,
                detail = err.detail(),
                "Summary fetch failed, showing zero totals"
            );
            (ProductSummary::zero(product.description.clone()), Some(err))
        }
    }
}
