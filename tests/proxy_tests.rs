//! HTTP proxy routes served on a real socket.

mod support;

use std::sync::Arc;

use salescope::adapter::inbound::http::{cors_layer, proxy_client, router, AppState};
use salescope::adapter::outbound::upstream::UpstreamClient;
use salescope::error::FetchError;
use salescope::infrastructure::config::settings::Config;
use salescope::testkit::catalog::StaticCatalog;
use salescope::testkit::domain::{product, sale};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use rust_decimal_macros::dec;
use support::http::{StubResponse, StubServer};
use support::payload;

async fn spawn_proxy(state: AppState) -> String {
    let app = router(state).layer(cors_layer("http://localhost:5173").unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn static_state(catalog: StaticCatalog) -> AppState {
    AppState::new(Arc::new(catalog))
}

#[tokio::test]
async fn products_route_wraps_payload_in_success_envelope() {
    let catalog = StaticCatalog::new(vec![product(1, "Apple", dec!(5))]);
    let base = spawn_proxy(static_state(catalog)).await;

    let (status, body) = get_json(&format!("{base}/api/product/products")).await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][0]["description"], "Apple");
    assert_eq!(body["data"][0]["salesPrice"], json!(5.0));
    assert_eq!(body["data"][0]["imageUrl"], "apple.png");
}

#[tokio::test]
async fn product_sales_route_forwards_id() {
    let catalog = StaticCatalog::new(vec![product(4, "Kiwi", dec!(3))]).with_sales(
        4,
        vec![sale(40, 4, dec!(3), 2, "2024-05-01")],
    );
    let base = spawn_proxy(static_state(catalog)).await;

    let (status, body) =
        get_json(&format!("{base}/api/productsale/product-sales?id=4")).await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"][0]["saleId"], 40);
    assert_eq!(body["data"][0]["saleQty"], 2);
    assert_eq!(body["data"][0]["saleDate"], "2024-05-01");
}

#[tokio::test]
async fn unknown_product_yields_empty_success() {
    let base = spawn_proxy(static_state(StaticCatalog::new(vec![]))).await;

    let (_, body) = get_json(&format!("{base}/api/productsale/product-sales?id=999")).await;

    assert_eq!(body, json!({ "message": "Success", "data": [] }));
}

#[tokio::test]
async fn missing_or_bad_id_is_bad_request() {
    let base = spawn_proxy(static_state(StaticCatalog::new(vec![]))).await;

    let (status, body) = get_json(&format!("{base}/api/productsale/product-sales")).await;
    assert_eq!(status, 400);
    assert_eq!(body["data"], json!([]));

    let (status, _) = get_json(&format!("{base}/api/productsale/product-sales?id=abc")).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn transport_failure_maps_to_fetch_error_message() {
    let catalog = StaticCatalog::failing(FetchError::Transport {
        detail: "connection refused".into(),
    });
    let base = spawn_proxy(static_state(catalog)).await;

    let (status, body) = get_json(&format!("{base}/api/product/products")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "message": "Error fetching data from the API.", "data": [] })
    );
}

#[tokio::test]
async fn malformed_upstream_maps_to_unexpected_error_message() {
    let upstream = StubServer::start(vec![(
        "/product-sales",
        StubResponse::ok("not json at all"),
    )])
    .await;
    let state = AppState::new(Arc::new(UpstreamClient::new(upstream.url())));
    let base = spawn_proxy(state).await;

    let (_, body) = get_json(&format!("{base}/api/productsale/product-sales?id=1")).await;

    assert_eq!(
        body,
        json!({ "message": "An unexpected error occurred.", "data": [] })
    );
    assert_eq!(upstream.requests(), vec!["/product-sales?id=1".to_string()]);
}

#[tokio::test]
async fn proxy_relays_upstream_products() {
    let upstream = StubServer::start(vec![(
        "/products",
        StubResponse::ok(payload::success(vec![payload::product(2, "Pear", 10.0)])),
    )])
    .await;
    let state = AppState::new(Arc::new(UpstreamClient::new(upstream.url())));
    let base = spawn_proxy(state).await;

    let (_, body) = get_json(&format!("{base}/api/product/products")).await;

    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"][0]["description"], "Pear");
    assert_eq!(body["data"][0]["salesPrice"], json!(10.0));
}

#[tokio::test]
async fn proxy_reshapes_bare_upstream_array_into_envelope() {
    let upstream = StubServer::start(vec![
        (
            "/products",
            StubResponse::ok(payload::bare(vec![payload::product(1, "Apple", 5.0)])),
        ),
        (
            "/product-sales?id=1",
            StubResponse::ok(payload::bare(vec![payload::sale(7, 1, 5.0, 3, "2024-02-10")])),
        ),
    ])
    .await;
    let mut config = Config::default();
    config.upstream.base_url = upstream.url().to_string();
    let base = spawn_proxy(AppState::new(Arc::new(proxy_client(&config)))).await;

    let (status, body) = get_json(&format!("{base}/api/product/products")).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][0]["imageUrl"], "apple.png");

    let (_, body) = get_json(&format!("{base}/api/productsale/product-sales?id=1")).await;
    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"][0]["saleId"], 7);
    assert_eq!(body["data"][0]["saleQty"], 3);
}

#[tokio::test]
async fn bare_mode_proxy_treats_envelope_body_as_malformed() {
    let upstream = StubServer::start(vec![(
        "/products",
        StubResponse::ok(payload::success(vec![payload::product(2, "Pear", 10.0)])),
    )])
    .await;
    let mut config = Config::default();
    config.upstream.base_url = upstream.url().to_string();
    let base = spawn_proxy(AppState::new(Arc::new(proxy_client(&config)))).await;

    let (_, body) = get_json(&format!("{base}/api/product/products")).await;

    assert_eq!(
        body,
        json!({ "message": "An unexpected error occurred.", "data": [] })
    );
}

#[tokio::test]
async fn health_reports_version() {
    let base = spawn_proxy(static_state(StaticCatalog::new(vec![]))).await;

    let (status, body) = get_json(&format!("{base}/health")).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn cors_admits_configured_origin_only() {
    let base = spawn_proxy(static_state(StaticCatalog::new(vec![]))).await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(format!("{base}/health"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );

    let other = client
        .get(format!("{base}/health"))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(other.headers().get("access-control-allow-origin").is_none());
}
