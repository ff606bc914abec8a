//! Product and date-range filtering over enriched sales.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{EnrichedSale, ProductId};

/// Filter criteria for the sales table. Every criterion is optional and they
/// combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleFilter {
    /// Exact product match.
    pub product_id: Option<ProductId>,
    /// Inclusive lower bound on the sale date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the sale date.
    pub end_date: Option<NaiveDate>,
}

impl SaleFilter {
    #[must_use]
    pub fn matches(&self, sale: &EnrichedSale) -> bool {
        self.product_id.map_or(true, |id| sale.product_id == id)
            && self.start_date.map_or(true, |start| sale.sale_date >= start)
            && self.end_date.map_or(true, |end| sale.sale_date <= end)
    }

    /// True when no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.product_id.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Keep the sales that match `filter`, in input order.
#[must_use]
pub fn apply_filters(sales: &[EnrichedSale], filter: &SaleFilter) -> Vec<EnrichedSale> {
    sales
        .iter()
        .filter(|sale| filter.matches(sale))
        .cloned()
        .collect()
}

/// Distinct products present in `sales`, sorted by id, for a product selector.
#[must_use]
pub fn product_options(sales: &[EnrichedSale]) -> Vec<(ProductId, String)> {
    let mut options: Vec<(ProductId, String)> = sales
        .iter()
        .map(|sale| (sale.product_id, sale.description.clone()))
        .collect();
    options.sort_by_key(|(id, _)| *id);
    options.dedup_by_key(|(id, _)| *id);
    options
}
