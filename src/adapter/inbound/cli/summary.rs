//! Handler for the `summary` command.

use crate::adapter::inbound::cli::{format, output, report};
use crate::adapter::outbound::upstream::UpstreamClient;
use crate::application::summary_or_zero;
use crate::domain::{Product, ProductId, ProductSummary};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::CatalogSource;

/// Execute `summary <id>`.
///
/// A failed sales fetch shows zero totals with a warning; an unknown product
/// id or a failed product listing is an error.
pub async fn execute(config: &Config, id: ProductId) -> Result<()> {
    let client = UpstreamClient::from_config(&config.upstream);
    let products = client
        .fetch_products()
        .await
        .map_err(|e| report::failure("summary", e))?;
    let product = find_product(&products, id)?;

    let (summary, failure) = summary_or_zero(&client, product).await;
    if let Some(err) = failure {
        output::warning(&format!(
            "sales for product {id} unavailable, showing zero totals: {err}"
        ));
    }

    if output::is_json() {
        return report::success("summary", &summary);
    }

    render(product, &summary);
    Ok(())
}

fn find_product(products: &[Product], id: ProductId) -> Result<&Product> {
    products
        .iter()
        .find(|product| product.id == id)
        .ok_or_else(|| Error::InvalidArgument(format!("no product with id {id}")))
}

fn render(product: &Product, summary: &ProductSummary) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Summary");
    output::field("Product", &summary.description);
    output::field("Category", &product.category);
    output::field(
        "Quantity sold",
        format!("{} units", output::highlight(summary.quantity_total)),
    );
    output::field("Revenue", output::highlight(format::money(summary.sale_total)));
}
