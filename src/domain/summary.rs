//! Per-product sales totals.

use rust_decimal::Decimal;
use serde::Serialize;

use super::sale::SaleRecord;

/// Revenue and volume over a set of sales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleTotals {
    /// Sum of `sale_price * sale_qty`.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub sale_total: Decimal,
    /// Sum of `sale_qty`.
    pub quantity_total: u64,
}

impl SaleTotals {
    /// Fold a batch of records; an empty batch yields zero totals.
    #[must_use]
    pub fn from_records(records: &[SaleRecord]) -> Self {
        records.iter().fold(Self::default(), |totals, record| Self {
            sale_total: totals.sale_total.saturating_add(record.line_total()),
            quantity_total: totals.quantity_total + u64::from(record.sale_qty),
        })
    }
}

/// What the summary panel shows for a selected product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub sale_total: Decimal,
    pub quantity_total: u64,
}

impl ProductSummary {
    #[must_use]
    pub fn new(description: impl Into<String>, totals: SaleTotals) -> Self {
        Self {
            description: description.into(),
            sale_total: totals.sale_total,
            quantity_total: totals.quantity_total,
        }
    }

    /// A summary with zero totals.
    #[must_use]
    pub fn zero(description: impl Into<String>) -> Self {
        Self::new(description, SaleTotals::default())
    }
}
