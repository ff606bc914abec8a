//! Sale records, raw and enriched.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::ProductId;
use super::product::Product;

/// A raw sale as returned by the upstream `product-sales` endpoint.
///
/// PascalCase field names are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    #[serde(alias = "SaleId")]
    pub sale_id: i64,
    #[serde(alias = "ProductId")]
    pub product_id: ProductId,
    #[serde(
        alias = "SalePrice",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub sale_price: Decimal,
    #[serde(alias = "SaleQty")]
    pub sale_qty: u32,
    #[serde(alias = "SaleDate", deserialize_with = "deserialize_sale_date")]
    pub sale_date: NaiveDate,
}

impl SaleRecord {
    /// `sale_price * sale_qty`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.sale_price.saturating_mul(Decimal::from(self.sale_qty))
    }
}

/// A sale joined with its product's descriptive fields and its computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSale {
    pub sale_id: i64,
    pub product_id: ProductId,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub sale_price: Decimal,
    pub sale_qty: u32,
    pub sale_date: NaiveDate,
    pub description: String,
    pub category: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub sale_total: Decimal,
}

impl EnrichedSale {
    /// Join a raw record with the product it was fetched for.
    #[must_use]
    pub fn from_record(record: SaleRecord, product: &Product) -> Self {
        let sale_total = record.line_total();
        Self {
            sale_id: record.sale_id,
            product_id: record.product_id,
            sale_price: record.sale_price,
            sale_qty: record.sale_qty,
            sale_date: record.sale_date,
            description: product.description.clone(),
            category: product.category.clone(),
            sale_total,
        }
    }
}

/// Parse an upstream sale date at calendar-day granularity.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and offset-less ISO timestamps
/// (`2024-01-01T13:45:00`); any time component is discarded.
#[must_use]
pub fn parse_sale_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|timestamp| timestamp.date())
        .ok()
}

fn deserialize_sale_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_sale_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid sale date: {raw:?}")))
}
