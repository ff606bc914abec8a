//! Handler for the `serve` command.

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `serve`.
pub async fn execute(config: &Config, bind: Option<&str>) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", bind.unwrap_or(&config.server.bind));
    output::field("Upstream", &config.upstream.base_url);
    output::field("CORS origin", &config.server.allowed_origin);
    output::note("press Ctrl-C to stop");
    http::serve(config, bind).await
}
