//! Handler for the `config` command group.

use std::path::{Path, PathBuf};

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH, UPSTREAM_URL_ENV};

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl ConfigSource {
    fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Defaults => format!("defaults ({DEFAULT_CONFIG_PATH} not found)"),
        }
    }
}

/// Load the configuration for a CLI run.
///
/// An explicit path must exist. Without one, `./salescope.toml` is used when
/// present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let config = Config::load(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    let source = if default_path.exists() {
        ConfigSource::File(default_path.to_path_buf())
    } else {
        ConfigSource::Defaults
    };
    Ok((Config::load_or_default(default_path)?, source))
}

/// Execute `config show`.
pub fn execute_show(config: &Config, source: &ConfigSource) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::to_value(config)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Effective Configuration");
    output::field("Source", source.describe());
    if std::env::var_os(UPSTREAM_URL_ENV).is_some() {
        output::note(&format!("upstream URL taken from {UPSTREAM_URL_ENV}"));
    }

    output::section("Upstream");
    output::field("Base URL", &config.upstream.base_url);
    output::field("Products", &config.upstream.products_path);
    output::field("Product sales", &config.upstream.product_sales_path);
    output::field(
        "Format",
        config
            .upstream
            .format
            .map_or("envelope (CLI), bare (serve)", |format| format.as_str()),
    );
    output::field(
        "Timeout",
        config
            .upstream
            .timeout_ms
            .map_or_else(|| "none".to_string(), |ms| format!("{ms}ms")),
    );

    output::section("Aggregation");
    output::field("Concurrency", config.aggregation.max_concurrency);

    output::section("View");
    output::field("Page size", config.view.page_size);

    output::section("Server");
    output::field("Bind", &config.server.bind);
    output::field("CORS origin", &config.server.allowed_origin);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`. Loading already validated the file.
pub fn execute_validate(source: &ConfigSource) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "config.validate",
            "valid": true,
            "source": source.describe(),
        }));
        return Ok(());
    }
    output::success(&format!("configuration is valid: {}", source.describe()));
    Ok(())
}
