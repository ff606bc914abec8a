//! Route table and handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::adapter::outbound::upstream::Envelope;
use crate::domain::ProductId;
use crate::error::FetchResult;
use crate::port::CatalogSource;

/// Envelope message for a request without a usable product id.
const INVALID_ID_MESSAGE: &str = "A numeric product id is required.";

/// Shared state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }
}

/// Build the proxy routes over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/product/products", get(handle_products))
        .route("/api/productsale/product-sales", get(handle_product_sales))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Republish a fetch outcome as an envelope.
fn envelope<T>(result: FetchResult<Vec<T>>) -> Envelope<T> {
    match result {
        Ok(data) => Envelope::success(data),
        Err(err) => {
            warn!(error = %err, detail = err.detail(), "Upstream fetch failed");
            Envelope::failure(err.envelope_message())
        }
    }
}

async fn handle_products(State(state): State<AppState>) -> Response {
    debug!("GET /api/product/products");
    Json(envelope(state.source.fetch_products().await)).into_response()
}

#[derive(Debug, Deserialize)]
struct SalesQuery {
    id: Option<String>,
}

async fn handle_product_sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> Response {
    let Some(id) = query.id.as_deref().and_then(|raw| raw.parse::<ProductId>().ok()) else {
        let body: Envelope<()> = Envelope::failure(INVALID_ID_MESSAGE);
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };
    debug!(product_id = %id, "GET /api/productsale/product-sales");
    Json(envelope(state.source.fetch_product_sales(id).await)).into_response()
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
