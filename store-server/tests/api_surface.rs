//! HTTP surface tests: wire format, status codes, error envelope.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use store_server::api;
use store_server::core::{Config, ServerState};
use store_server::db::DbService;
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app(dir: &TempDir) -> Router {
    let path = dir.path().join("store.db");
    let pool = DbService::new(path.to_str().unwrap()).await.unwrap().pool;
    let config = Config {
        http_port: 0,
        database_path: path.display().to_string(),
        log_level: "info".into(),
        log_dir: None,
        environment: "test".into(),
        request_timeout_ms: 5000,
        checkout_max_retries: 3,
        checkout_retry_backoff_ms: 5,
    };
    api::router(ServerState::with_pool(config, pool))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn seeded_product_id(app: &Router, name: &str) -> i64 {
    let (status, products) = send(app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    products
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("product {name} not seeded"))["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn seed_then_list_products() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = send(&app, "POST", "/api/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inserted"], 6);

    let (status, products) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 6);

    // camelCase wire format, derived inStock
    let candy = products.iter().find(|p| p["name"] == "Candy Pack").unwrap();
    assert_eq!(candy["inStock"], false);
    assert_eq!(candy["stock"], 0);
    assert_eq!(candy["category"], "Snacks");
}

#[tokio::test]
async fn checkout_over_http_ignores_forged_price() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    send(&app, "POST", "/api/seed", None).await;
    let cookies = seeded_product_id(&app, "Chocolate Cookies").await;

    let (status, order) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "userId": "user-abc",
            "items": [{"productId": cookies, "quantity": 2, "price": 0.01, "name": "hack"}],
            "roomNumber": "C-12"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["totalAmount"], 50.0);
    assert_eq!(order["items"][0]["name"], "Chocolate Cookies");
    assert_eq!(order["hostelName"], "Himalaya");
}

#[tokio::test]
async fn insufficient_stock_maps_to_conflict() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    send(&app, "POST", "/api/seed", None).await;
    let candy = seeded_product_id(&app, "Candy Pack").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "userId": "user-abc",
            "items": [{"productId": candy, "quantity": 1}],
            "roomNumber": "C-12"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0005");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Candy Pack"), "message: {message}");
    assert!(message.contains("Available: 0"), "message: {message}");
}

#[tokio::test]
async fn empty_cart_maps_to_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({"userId": "u", "items": [], "roomNumber": "C-12"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn status_patch_and_tracking_read() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    send(&app, "POST", "/api/seed", None).await;
    let chips = seeded_product_id(&app, "Potato Chips").await;

    let (_, order) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "userId": "user-abc",
            "items": [{"productId": chips, "quantity": 1}],
            "roomNumber": "C-12"
        })),
    )
    .await;
    let order_id = order["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{order_id}"),
        Some(json!({"status": "on-the-way"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "on-the-way");

    // The tracking page polls this read
    let (status, fetched) = send(&app, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["status"], "on-the-way");

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/orders/999999",
        Some(json!({"status": "delivered"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn stock_patch_recomputes_in_stock() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;
    send(&app, "POST", "/api/seed", None).await;
    let juice = seeded_product_id(&app, "Fruit Juice").await;

    let (status, product) = send(
        &app,
        "PATCH",
        &format!("/api/products/{juice}/stock"),
        Some(json!({"stock": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["inStock"], false);

    let (_, product) = send(
        &app,
        "PATCH",
        &format!("/api/products/{juice}"),
        Some(json!({"stock": 9})),
    )
    .await;
    assert_eq!(product["inStock"], true);
    assert_eq!(product["stock"], 9);
}

#[tokio::test]
async fn health_reports_database() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir).await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}
