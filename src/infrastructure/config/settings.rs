//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional. The
//! `SALESCOPE_UPSTREAM_URL` environment variable overrides the upstream base URL.
//!
//! # Example
//!
//! ```no_run
//! use salescope::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("salescope.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::logging::LoggingConfig;
use super::service::{AggregationConfig, ServerConfig, ViewConfig};
use crate::adapter::outbound::upstream::UpstreamConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that replaces `upstream.base_url`.
pub const UPSTREAM_URL_ENV: &str = "SALESCOPE_UPSTREAM_URL";

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "salescope.toml";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream catalog API connection.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Sales fan-out limits.
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// Sales table paging.
    #[serde(default)]
    pub view: ViewConfig,

    /// Proxy server binding and CORS.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        let config = config.with_upstream_override(std::env::var(UPSTREAM_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Environment overrides and validation apply either way.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file; validation errors for
    /// the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        debug!(path = %path.display(), "config file not found, using defaults");
        Self::parse_toml("")
    }

    fn with_upstream_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.upstream.base_url = url.trim().to_string();
        }
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first field that is missing or out of range.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.upstream.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "upstream.base_url",
            }
            .into());
        }
        let parsed = url::Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            field: "upstream.base_url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "upstream.base_url",
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            }
            .into());
        }
        if self.upstream.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "upstream.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.aggregation.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "aggregation.max_concurrency",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.view.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "view.page_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind",
                reason: format!("{:?} is not a socket address", self.server.bind),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn invalid_field(toml: &str) -> &'static str {
        let config: Config = toml::from_str(toml).unwrap();
        match config.validate() {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => field,
            Err(Error::Config(ConfigError::MissingField { field })) => field,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.aggregation.max_concurrency, 8);
        assert_eq!(config.view.page_size, 50);
        assert_eq!(config.server.bind, "127.0.0.1:5250");
        assert_eq!(config.server.allowed_origin, "http://localhost:5173");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.upstream.products_path, "/products");
    }

    #[test]
    fn full_file_is_parsed() {
        let config: Config = toml::from_str(
            r#"
[upstream]
base_url = "http://localhost:9000"
timeout_ms = 5000

[aggregation]
max_concurrency = 2

[view]
page_size = 25

[server]
bind = "0.0.0.0:8080"
allowed_origin = "https://sales.example.com"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.upstream.base_url, "http://localhost:9000");
        assert_eq!(config.upstream.timeout_ms, Some(5000));
        assert_eq!(config.aggregation.max_concurrency, 2);
        assert_eq!(config.view.page_size, 25);
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(invalid_field("[view]\npage_size = 0"), "view.page_size");
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        assert_eq!(
            invalid_field("[aggregation]\nmax_concurrency = 0"),
            "aggregation.max_concurrency"
        );
    }

    #[test]
    fn empty_base_url_is_missing() {
        assert_eq!(
            invalid_field("[upstream]\nbase_url = \"  \""),
            "upstream.base_url"
        );
    }

    #[test]
    fn unparseable_base_url_is_rejected() {
        assert_eq!(
            invalid_field("[upstream]\nbase_url = \"not a url\""),
            "upstream.base_url"
        );
        assert_eq!(
            invalid_field("[upstream]\nbase_url = \"ftp://example.com\""),
            "upstream.base_url"
        );
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        assert_eq!(invalid_field("[server]\nbind = \"localhost\""), "server.bind");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert_eq!(
            invalid_field("[upstream]\ntimeout_ms = 0"),
            "upstream.timeout_ms"
        );
    }

    #[test]
    fn upstream_override_replaces_base_url() {
        let config =
            Config::default().with_upstream_override(Some(" http://127.0.0.1:7000 ".into()));
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:7000");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = Config::default().with_upstream_override(Some("   ".into()));
        assert_eq!(config.upstream.base_url, UpstreamConfig::default().base_url);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::parse_toml("[view\npage_size = 3").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Config::load("/definitely/not/here/salescope.toml").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }
}
