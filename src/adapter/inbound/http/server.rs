//! Listener setup, CORS, and graceful shutdown.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::router::{router, AppState};
use crate::adapter::outbound::upstream::{ResponseFormat, UpstreamClient};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// CORS policy that admits GET requests from `origin` only.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidValue {
            field: "server.allowed_origin",
            reason: e.to_string(),
        })?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]))
}

/// Run the proxy until Ctrl-C.
///
/// Binds to `bind` when given, otherwise to `server.bind`. Every request is
/// forwarded to the configured upstream.
pub async fn serve(config: &Config, bind: Option<&str>) -> Result<()> {
    let bind_addr = bind.unwrap_or(&config.server.bind).to_string();
    let source = Arc::new(proxy_client(config));

    let app = router(AppState::new(source))
        .layer(cors_layer(&config.server.allowed_origin)?)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        upstream = %config.upstream.base_url,
        "Proxy listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Proxy stopped");
    Ok(())
}

/// Upstream client for the proxy role.
///
/// The raw catalog API answers with bare arrays, so that is the default shape
/// here unless `upstream.format` says otherwise.
#[must_use]
pub fn proxy_client(config: &Config) -> UpstreamClient {
    UpstreamClient::from_config(&config.upstream)
        .with_format(config.upstream.format.unwrap_or(ResponseFormat::Bare))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Ctrl-C handler unavailable, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
