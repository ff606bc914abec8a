//! In-memory [`CatalogSource`] with scripted results.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Product, ProductId, SaleRecord};
use crate::error::{FetchError, FetchResult};
use crate::port::outbound::catalog::CatalogSource;

/// Catalog source that serves canned products and per-product sale batches.
///
/// Products without scripted sales return an empty batch, mirroring the
/// upstream's behavior for unknown ids. Tracks how many sale fetches ran and
/// the peak number in flight at once.
#[derive(Debug)]
pub struct StaticCatalog {
    products: FetchResult<Vec<Product>>,
    sales: HashMap<ProductId, FetchResult<Vec<SaleRecord>>>,
    delays: HashMap<ProductId, Duration>,
    sale_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_products_result(Ok(products))
    }

    /// A catalog whose product listing fails.
    pub fn failing(err: FetchError) -> Self {
        Self::with_products_result(Err(err))
    }

    fn with_products_result(products: FetchResult<Vec<Product>>) -> Self {
        Self {
            products,
            sales: HashMap::new(),
            delays: HashMap::new(),
            sale_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_sales(mut self, product_id: i64, sales: Vec<SaleRecord>) -> Self {
        self.sales.insert(ProductId::new(product_id), Ok(sales));
        self
    }

    pub fn with_sales_error(mut self, product_id: i64, err: FetchError) -> Self {
        self.sales.insert(ProductId::new(product_id), Err(err));
        self
    }

    /// Delay the sale fetch of one product.
    pub fn with_delay(mut self, product_id: i64, delay: Duration) -> Self {
        self.delays.insert(ProductId::new(product_id), delay);
        self
    }

    /// Number of sale fetches served so far.
    pub fn sale_calls(&self) -> usize {
        self.sale_calls.load(Ordering::SeqCst)
    }

    /// Highest number of sale fetches that were in flight together.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn source_name(&self) -> &'static str {
        "static"
    }

    async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        self.products.clone()
    }

    async fn fetch_product_sales(&self, product_id: ProductId) -> FetchResult<Vec<SaleRecord>> {
        self.sale_calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = self
            .delays
            .get(&product_id)
            .copied()
            .unwrap_or(Duration::from_millis(1));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.sales
            .get(&product_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
