//! Catalog domain types: products, sales, and derived totals.

mod ids;
mod product;
mod sale;
mod summary;

pub use ids::ProductId;
pub use product::Product;
pub use sale::{parse_sale_date, EnrichedSale, SaleRecord};
pub use summary::{ProductSummary, SaleTotals};
