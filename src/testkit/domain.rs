//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Product`], [`SaleRecord`], and
//! [`EnrichedSale`] so tests focus on assertions rather than construction
//! boilerplate.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{parse_sale_date, EnrichedSale, Product, ProductId, SaleRecord};

/// Parse a `YYYY-MM-DD` date, panicking on malformed input.
pub fn date(raw: &str) -> NaiveDate {
    parse_sale_date(raw).unwrap_or_else(|| panic!("invalid test date {raw:?}"))
}

/// Create a product in the "Fruit" category.
pub fn product(id: i64, description: &str, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        description: description.to_string(),
        sales_price: price,
        category: "Fruit".to_string(),
        image_url: format!("{}.png", description.to_ascii_lowercase()),
    }
}

/// Create a raw sale record.
pub fn sale(sale_id: i64, product_id: i64, price: Decimal, qty: u32, day: &str) -> SaleRecord {
    SaleRecord {
        sale_id,
        product_id: ProductId::new(product_id),
        sale_price: price,
        sale_qty: qty,
        sale_date: date(day),
    }
}

/// Create an enriched sale of one unit at price 1.
pub fn enriched(sale_id: i64, product_id: i64, day: &str) -> EnrichedSale {
    let owner = product(product_id, &format!("Product {product_id}"), Decimal::ONE);
    EnrichedSale::from_record(sale(sale_id, product_id, Decimal::ONE, 1, day), &owner)
}

/// Create `n` enriched sales with ids `1..=n`, all for product 1 on one day.
pub fn enriched_batch(n: usize) -> Vec<EnrichedSale> {
    (1..=n)
        .map(|i| enriched(i64::try_from(i).unwrap_or(i64::MAX), 1, "2024-01-01"))
        .collect()
}
