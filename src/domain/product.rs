//! Catalog product as published by the upstream API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::ProductId;

/// A product in the catalog.
///
/// Immutable once fetched; identity is [`Product::id`]. Prices serialize as
/// JSON numbers so the proxy surface matches the upstream shape. PascalCase
/// field names are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "Id")]
    pub id: ProductId,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(
        alias = "SalesPrice",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub sales_price: Decimal,
    #[serde(alias = "Category")]
    pub category: String,
    /// Older deployments publish this field as `image`.
    #[serde(default, alias = "image", alias = "Image", alias = "ImageUrl")]
    pub image_url: String,
}
