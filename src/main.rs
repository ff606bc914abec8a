use clap::Parser;
use tracing::{debug, error};

use salescope::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use salescope::adapter::inbound::cli::output::{self, OutputConfig};
use salescope::adapter::inbound::cli::{config as config_cmd, products, sales, serve, summary};
use salescope::domain::ProductId;
use salescope::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (mut config, source) = config_cmd::load(cli.config.as_deref())?;
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    };
    if let Some(level) = level {
        config.logging.level = level.to_string();
    }
    config.init_logging();
    debug!(?source, "Configuration loaded");

    match cli.command {
        Commands::Products => products::execute(&config).await,
        Commands::Summary(args) => summary::execute(&config, ProductId::new(args.id)).await,
        Commands::Sales(args) => sales::execute(&config, &args).await,
        Commands::Serve(args) => serve::execute(&config, args.bind.as_deref()).await,
        Commands::Config(ConfigCommand::Show) => config_cmd::execute_show(&config, &source),
        Commands::Config(ConfigCommand::Validate) => config_cmd::execute_validate(&source),
    }
}
