//! Command-line interface definitions.
//!
//! Defines the CLI structure for the salescope application using `clap`.
//! Subcommands browse the upstream catalog, summarise a product, page
//! through the unified sales list, and run the HTTP proxy.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Product catalog and sales browser for the upstream sales API
#[derive(Parser, Debug)]
#[command(name = "salescope")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ./salescope.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the salescope CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every product in the catalog
    Products,

    /// Show revenue and units sold for one product
    Summary(SummaryArgs),

    /// Show the unified sales table, filtered and paginated
    Sales(SalesArgs),

    /// Run the HTTP proxy for the front end
    Serve(ServeArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `salescope config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

/// Arguments for the `summary` subcommand.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Product identifier.
    pub id: i64,
}

/// Arguments for the `sales` subcommand.
#[derive(Parser, Debug)]
pub struct SalesArgs {
    /// Only sales of this product.
    #[arg(long)]
    pub product: Option<i64>,

    /// Earliest sale date, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest sale date, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Page to show, starting at 1.
    #[arg(long, default_value_t = 1, value_parser = parse_positive)]
    pub page: usize,

    /// Rows per page (overrides `view.page_size`).
    #[arg(long, value_parser = parse_positive)]
    pub page_size: Option<usize>,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Listen address (overrides `server.bind`).
    #[arg(long)]
    pub bind: Option<String>,
}

fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(e) => Err(e.to_string()),
    }
}
