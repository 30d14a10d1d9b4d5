//! End-to-end tests for the JSON API.
//!
//! Each test gets its own in-memory database; the server is exercised
//! through `axum_test::TestServer` exactly as the register frontend
//! would call it.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{json, Value};

use kiosk_api::{build_router, AppState};
use kiosk_core::Product;
use kiosk_db::{Database, DbConfig};

/// Builds a test server plus a handle to the same database for
/// fixtures and post-hoc assertions.
async fn test_server() -> (TestServer, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let state = AppState::new(db.clone());
    let server = TestServer::try_new(build_router(state, &[])).unwrap();
    (server, db)
}

fn shelf_item(code: &str, name: &str, price_cents: i64) -> Product {
    Product {
        code: code.to_string(),
        name: name.to_string(),
        price_cents,
        valid_from: None,
        valid_to: None,
        created_at: Utc::now(),
    }
}

// =============================================================================
// Product Search
// =============================================================================

#[tokio::test]
async fn product_search_resolves_override_entry() {
    let (server, _db) = test_server().await;

    let response = server
        .post("/product_search")
        .json(&json!({ "code": "12345678901" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["code"], "12345678901");
    assert_eq!(body["name"], "Green Tea 500ml");
    assert_eq!(body["price"], 150);
}

#[tokio::test]
async fn product_search_resolves_durable_row() {
    let (server, db) = test_server().await;

    db.products()
        .insert(&shelf_item("55555555555", "Shelf Item", 420))
        .await
        .unwrap();

    let response = server
        .post("/product_search")
        .json(&json!({ "code": "55555555555" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["name"], "Shelf Item");
    assert_eq!(body["price"], 420);
}

#[tokio::test]
async fn product_search_unknown_code_is_404() {
    let (server, _db) = test_server().await;

    let response = server
        .post("/product_search")
        .json(&json!({ "code": "00000000000" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("not registered"));
}

#[tokio::test]
async fn product_search_empty_code_is_422() {
    let (server, _db) = test_server().await;

    let response = server
        .post("/product_search")
        .json(&json!({ "code": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Purchase
// =============================================================================

#[tokio::test]
async fn purchase_posts_transaction_and_returns_totals() {
    let (server, db) = test_server().await;

    let response = server
        .post("/purchase")
        .json(&json!({
            "employeeCode": "1234567890",
            "storeCode": "30",
            "terminalId": "90",
            "items": [
                { "code": "12345678901", "name": "Green Tea 500ml", "price": 150 },
                { "code": "98765432101", "name": "Laundry Detergent", "price": 300 }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["totalAmount"], 495);
    assert_eq!(body["totalAmountExTax"], 450);

    // Exactly one header and two lines, and re-reading reproduces the
    // totals the call returned.
    assert_eq!(db.transactions().count().await.unwrap(), 1);
    let stored = db.transactions().get_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.total_cents, 495);
    assert_eq!(stored.total_ex_tax_cents, 450);
    assert_eq!(stored.employee_code, "1234567890");
    assert_eq!(stored.store_code, "30");
    assert_eq!(stored.terminal_id, "90");

    let lines = db.transactions().lines_for(1).await.unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].product_name, "Green Tea 500ml");
    assert_eq!(lines[0].tax_code, "10");
    assert_eq!(lines[1].unit_price_cents, 300);
}

#[tokio::test]
async fn purchase_without_employee_code_uses_default() {
    let (server, db) = test_server().await;

    let response = server
        .post("/purchase")
        .json(&json!({
            "storeCode": "30",
            "terminalId": "90",
            "items": [ { "code": "A", "name": "Tea", "price": 100 } ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let stored = db.transactions().get_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.employee_code, "9999999999");
}

#[tokio::test]
async fn purchase_with_no_items_posts_zero_total_header() {
    let (server, db) = test_server().await;

    let response = server
        .post("/purchase")
        .json(&json!({
            "storeCode": "30",
            "terminalId": "90",
            "items": []
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["totalAmount"], 0);
    assert_eq!(body["totalAmountExTax"], 0);

    assert_eq!(db.transactions().count().await.unwrap(), 1);
    assert!(db.transactions().lines_for(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn purchase_missing_store_code_is_422_and_persists_nothing() {
    let (server, db) = test_server().await;

    let response = server
        .post("/purchase")
        .json(&json!({
            "storeCode": "",
            "terminalId": "90",
            "items": [ { "code": "A", "name": "Tea", "price": 100 } ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(db.transactions().count().await.unwrap(), 0);
}

#[tokio::test]
async fn purchase_without_tax_rate_is_404_and_persists_nothing() {
    let (server, db) = test_server().await;

    sqlx::query("DELETE FROM tax_rates WHERE code = '10'")
        .execute(db.pool())
        .await
        .unwrap();

    let response = server
        .post("/purchase")
        .json(&json!({
            "storeCode": "30",
            "terminalId": "90",
            "items": [ { "code": "A", "name": "Tea", "price": 100 } ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(db.transactions().count().await.unwrap(), 0);
}

#[tokio::test]
async fn purchases_get_distinct_increasing_ids() {
    let (server, db) = test_server().await;

    for _ in 0..3 {
        let response = server
            .post("/purchase")
            .json(&json!({
                "storeCode": "30",
                "terminalId": "90",
                "items": [ { "code": "A", "name": "Tea", "price": 100 } ]
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    assert_eq!(db.transactions().count().await.unwrap(), 3);
    for id in 1..=3 {
        assert!(db.transactions().get_by_id(id).await.unwrap().is_some());
    }
}

// =============================================================================
// Listing & Health
// =============================================================================

#[tokio::test]
async fn products_lists_durable_rows() {
    let (server, db) = test_server().await;

    db.products()
        .insert(&shelf_item("A1", "First", 100))
        .await
        .unwrap();
    db.products()
        .insert(&shelf_item("B2", "Second", 200))
        .await
        .unwrap();

    let response = server.get("/products").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["code"], "A1");
    assert_eq!(listed[1]["price"], 200);
}

#[tokio::test]
async fn health_answers_ok() {
    let (server, _db) = test_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
