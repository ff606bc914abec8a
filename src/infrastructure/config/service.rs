//! Service configuration for aggregation, the sales view, and the proxy server.

use serde::{Deserialize, Serialize};

use crate::application::query::DEFAULT_PAGE_SIZE;
use crate::application::DEFAULT_MAX_CONCURRENCY;

/// Fan-out settings for the sales aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Upper bound on in-flight per-product sales requests.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

const fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

/// Sales table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Proxy server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Front-end origin allowed by CORS.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_bind() -> String {
    "127.0.0.1:5250".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            allowed_origin: default_allowed_origin(),
        }
    }
}
