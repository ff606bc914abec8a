//! HTTP proxy surface for the browser front end.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/api/product/products` | Product list envelope |
//! | `GET`  | `/api/productsale/product-sales?id={id}` | Sales envelope for one product |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! The upstream is read as bare JSON arrays unless `upstream.format` is set.
//! Upstream failures are reported inside the envelope with HTTP 200, as
//! `{"message": "Error fetching data from the API.", "data": []}` or
//! `{"message": "An unexpected error occurred.", "data": []}`.

mod router;
mod server;

pub use router::{router, AppState};
pub use server::{cors_layer, proxy_client, serve};
