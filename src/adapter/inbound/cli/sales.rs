//! Handler for the `sales` command.

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::SalesArgs;
use crate::adapter::inbound::cli::{format, output, report};
use crate::adapter::outbound::upstream::UpstreamClient;
use crate::application::query::{product_options, Page, SaleFilter, SalesView};
use crate::application::{SalesAggregator, UnifiedSales};
use crate::domain::{EnrichedSale, ProductId};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct SaleRow {
    #[tabled(rename = "Sale")]
    sale_id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Product")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Qty")]
    qty: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&EnrichedSale> for SaleRow {
    fn from(sale: &EnrichedSale) -> Self {
        Self {
            sale_id: sale.sale_id,
            date: sale.sale_date.format("%Y-%m-%d").to_string(),
            description: sale.description.clone(),
            category: sale.category.clone(),
            qty: sale.sale_qty,
            price: format::money(sale.sale_price),
            total: format::money(sale.sale_total),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SalesReport<'a> {
    filter: SaleFilter,
    page: &'a Page<EnrichedSale>,
    complete: bool,
    failed_products: &'a [ProductId],
    products: Vec<(ProductId, String)>,
}

/// Build the view state requested on the command line.
///
/// An inverted date range is passed through and simply matches nothing.
#[must_use]
pub fn view_from_args(args: &SalesArgs, default_page_size: usize) -> SalesView {
    let filter = SaleFilter {
        product_id: args.product.map(ProductId::new),
        start_date: args.from,
        end_date: args.to,
    };
    SalesView::new(args.page_size.unwrap_or(default_page_size))
        .with_filter(filter)
        .with_page(args.page)
}

/// Execute `sales`.
pub async fn execute(config: &Config, args: &SalesArgs) -> Result<()> {
    let view = view_from_args(args, config.view.page_size);

    let client = UpstreamClient::from_config(&config.upstream);
    let unified = SalesAggregator::new(&client)
        .with_max_concurrency(config.aggregation.max_concurrency)
        .fetch_all_enriched_sales()
        .await
        .map_err(|e| report::failure("sales", e))?;

    if !unified.is_complete() {
        output::warning(&incomplete_message(&unified));
    }

    let page = view.render(&unified.sales);
    let options = product_options(&unified.sales);

    if output::is_json() {
        return report::success(
            "sales",
            &SalesReport {
                filter: view.filter,
                page: &page,
                complete: unified.is_complete(),
                failed_products: &unified.failed_products,
                products: options,
            },
        );
    }

    render(&page);
    if let Some(id) = view.filter.product_id {
        if !options.iter().any(|(option, _)| *option == id) {
            output::hint(&format!(
                "product {id} has no sales; products with sales: {}",
                describe_options(&options)
            ));
        }
    }
    Ok(())
}

fn describe_options(options: &[(ProductId, String)]) -> String {
    if options.is_empty() {
        return "none".to_string();
    }
    options
        .iter()
        .map(|(id, description)| format!("{id} {description}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn incomplete_message(unified: &UnifiedSales) -> String {
    let ids: Vec<String> = unified
        .failed_products
        .iter()
        .map(ToString::to_string)
        .collect();
    format!(
        "sales missing for {} of {} products (ids: {})",
        unified.failed_products.len(),
        unified.product_count,
        ids.join(", ")
    )
}

fn render(page: &Page<EnrichedSale>) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Product Sales");
    if page.items.is_empty() {
        output::note("(no sales match)");
    } else {
        let rows: Vec<SaleRow> = page.items.iter().map(SaleRow::from).collect();
        output::lines(&Table::new(rows).to_string());
    }
    output::field(
        "Page",
        format!(
            "{} of {}",
            output::highlight(page.page_number),
            page.total_pages
        ),
    );
    output::field("Matching", page.total_items);
    if page.has_next() {
        output::hint(&format!(
            "run with `--page {}` for the next page",
            page.page_number + 1
        ));
    }
}
