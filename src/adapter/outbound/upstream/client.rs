//! Upstream catalog REST client.
//!
//! Issues plain GETs against the product and product-sales endpoints and
//! folds every failure into a [`FetchError`]. No retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::dto::decode_payload;
use super::settings::{ResponseFormat, UpstreamConfig};
use crate::domain::{Product, ProductId, SaleRecord};
use crate::error::{FetchError, FetchResult};
use crate::port::outbound::catalog::CatalogSource;

const PRODUCTS_CONTEXT: &str = "Failed to fetch products";
const PRODUCT_SALES_CONTEXT: &str = "Failed to fetch product sales";

/// HTTP client for the upstream catalog API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: HttpClient,
    base_url: String,
    products_path: String,
    product_sales_path: String,
    format: ResponseFormat,
}

impl UpstreamClient {
    /// Create a client for `base_url` with the default endpoint paths.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL for the upstream API
    ///   (e.g., `http://localhost:5250/api`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&UpstreamConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn from_config(config: &UpstreamConfig) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        if let Some(connect_timeout_ms) = config.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(connect_timeout_ms));
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            products_path: config.products_path.clone(),
            product_sales_path: config.product_sales_path.clone(),
            format: config.format.unwrap_or_default(),
        }
    }

    /// Decode responses as `format` instead of the configured shape.
    #[must_use]
    pub const fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_list<T>(
        &self,
        url: &str,
        query: &[(&str, String)],
        context: &'static str,
    ) -> FetchResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                warn!(url = %url, error = %err, "Upstream request failed");
                FetchError::transport(&err)
            })?;

        let body = response.bytes().await.map_err(|err| {
            warn!(url = %url, error = %err, "Failed to read upstream response body");
            FetchError::transport(&err)
        })?;

        decode_payload(&body, self.format, context).inspect_err(|err| {
            warn!(url = %url, error = %err, detail = err.detail(), "Upstream response rejected");
        })
    }
}

#[async_trait]
impl CatalogSource for UpstreamClient {
    fn source_name(&self) -> &'static str {
        "upstream"
    }

    async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        let url = self.endpoint(&self.products_path);
        info!(url = %url, "Fetching products");

        let products: Vec<Product> = self.get_list(&url, &[], PRODUCTS_CONTEXT).await?;
        debug!(count = products.len(), "Fetched products");

        Ok(products)
    }

    async fn fetch_product_sales(&self, product_id: ProductId) -> FetchResult<Vec<SaleRecord>> {
        let url = self.endpoint(&self.product_sales_path);
        debug!(url = %url, product_id = %product_id, "Fetching product sales");

        let sales: Vec<SaleRecord> = self
            .get_list(&url, &[("id", product_id.to_string())], PRODUCT_SALES_CONTEXT)
            .await?;
        debug!(product_id = %product_id, count = sales.len(), "Fetched product sales");

        Ok(sales)
    }
}
