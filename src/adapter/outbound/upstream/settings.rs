//! Upstream API configuration.

use serde::{Deserialize, Serialize};

/// Shape of a successful upstream response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `{message, data}` with a `"Success"` discriminator.
    #[default]
    Envelope,
    /// A bare JSON array; any 2xx body that decodes is a success.
    Bare,
}

impl ResponseFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Envelope => "envelope",
            Self::Bare => "bare",
        }
    }
}

/// Connection settings for the upstream catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the product list endpoint.
    #[serde(default = "default_products_path")]
    pub products_path: String,
    /// Path of the per-product sales endpoint (takes `?id=`).
    #[serde(default = "default_product_sales_path")]
    pub product_sales_path: String,
    /// Request timeout in milliseconds. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Connect timeout in milliseconds.
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    /// Response shape. Unset means `envelope` for the CLI and `bare` for
    /// `serve`, which sits in front of the raw catalog API.
    #[serde(default)]
    pub format: Option<ResponseFormat>,
}

fn default_base_url() -> String {
    "https://singularsystems-tech-assessment-sales-api2.azurewebsites.net".to_string()
}

fn default_products_path() -> String {
    "/products".to_string()
}

fn default_product_sales_path() -> String {
    "/product-sales".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            products_path: default_products_path(),
            product_sales_path: default_product_sales_path(),
            timeout_ms: None,
            connect_timeout_ms: None,
            format: None,
        }
    }
}
