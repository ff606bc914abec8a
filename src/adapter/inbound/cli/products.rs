//! Handler for the `products` command.

use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::{format, output, report};
use crate::adapter::outbound::upstream::UpstreamClient;
use crate::domain::Product;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::CatalogSource;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Sales Price")]
    price: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: format::money(product.sales_price),
            image: format::truncate(&product.image_url, 40),
        }
    }
}

/// Execute `products`.
pub async fn execute(config: &Config) -> Result<()> {
    let client = UpstreamClient::from_config(&config.upstream);
    let products = client
        .fetch_products()
        .await
        .map_err(|e| report::failure("products", e))?;

    if output::is_json() {
        return report::success("products", &products);
    }

    render(&products);
    Ok(())
}

fn render(products: &[Product]) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Products");
    if products.is_empty() {
        output::note("(no products)");
        return;
    }

    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::field("Total", products.len());
    output::hint("run `salescope summary <ID>` for a product's sales totals");
}
