//! Order endpoint integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;

use topup_core::{InvoiceId, Transaction};
use topup_store::Store;

fn checkout_body(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "phone": "08123456789",
        "game_name": "Mobile Legends",
        "item_name": "50 Diamonds",
        "price": 15_000,
        "unique_code": 421,
        "final_price": 15_421
    })
}

async fn insert_order(harness: &TestHarness, id: &str, price: i64) {
    let tx = Transaction::new(
        id.parse::<InvoiceId>().unwrap(),
        "08123456789",
        "Free Fire",
        "12 Diamonds",
        price,
        7,
    );
    harness
        .store
        .as_ref()
        .insert_transaction(&tx)
        .await
        .unwrap();
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn create_then_get_returns_same_fields() {
    let harness = TestHarness::new_empty();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&checkout_body("DS1234567890"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Transaction created");
    assert_eq!(body["id"], "DS1234567890");

    let response = harness.server.get("/api/transactions/DS1234567890").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], "DS1234567890");
    assert_eq!(body["phone"], "08123456789");
    assert_eq!(body["game_name"], "Mobile Legends");
    assert_eq!(body["item_name"], "50 Diamonds");
    assert_eq!(body["price"], 15_000);
    assert_eq!(body["unique_code"], 421);
    assert_eq!(body["final_price"], 15_421);
    assert_eq!(body["status"], "Waiting");
}

#[tokio::test]
async fn create_defaults_surcharge_and_final_price() {
    let harness = TestHarness::new_empty();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&json!({
            "id": "DS1234567890",
            "phone": "08123456789",
            "game_name": "Valorant",
            "item_name": "125 Points",
            "price": 15_000
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let response = harness.server.get("/api/transactions/DS1234567890").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["unique_code"], 0);
    assert_eq!(body["final_price"], 15_000);
}

#[tokio::test]
async fn create_missing_fields_bad_request() {
    let harness = TestHarness::new_empty();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&json!({
            "id": "DS1234567890",
            "game_name": "Mobile Legends",
            "item_name": "50 Diamonds",
            "price": 15_000
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn create_empty_invoice_id_bad_request() {
    let harness = TestHarness::new_empty();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&checkout_body(""))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_invoice_id_is_a_database_error() {
    let harness = TestHarness::new_empty();

    harness
        .server
        .post("/api/transactions")
        .json(&checkout_body("DS1234567890"))
        .await
        .assert_status(StatusCode::CREATED);

    // No collision check before insert; the duplicate key surfaces as 500.
    let response = harness
        .server
        .post("/api/transactions")
        .json(&checkout_body("DS1234567890"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Database error");
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn list_defaults_to_ten_newest_first() {
    let harness = TestHarness::new_empty();
    for i in 0..12 {
        insert_order(&harness, &format!("DS10000000{i:02}"), 1_000 * (i + 1)).await;
    }

    let response = harness.server.get("/api/transactions").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["id"], "DS1000000011");
    assert_eq!(rows[9]["id"], "DS1000000002");
}

#[tokio::test]
async fn list_limit_minus_one_returns_all() {
    let harness = TestHarness::new_empty();
    for i in 0..12 {
        insert_order(&harness, &format!("DS10000000{i:02}"), 1_000).await;
    }

    let response = harness
        .server
        .get("/api/transactions")
        .add_query_param("limit", -1)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn list_honors_explicit_limit() {
    let harness = TestHarness::new_empty();
    for i in 0..5 {
        insert_order(&harness, &format!("DS10000000{i:02}"), 1_000).await;
    }

    let response = harness
        .server
        .get("/api/transactions")
        .add_query_param("limit", 2)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "DS1000000004");
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn get_unknown_transaction_not_found() {
    let harness = TestHarness::new_empty();

    let response = harness.server.get("/api/transactions/DS0000000000").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Transaction not found");
}

// ============================================================================
// Status workflow
// ============================================================================

#[tokio::test]
async fn update_status_moves_order_through_workflow() {
    let harness = TestHarness::new_empty();
    insert_order(&harness, "DS1234567890", 15_000).await;

    for status in ["Processing", "Success"] {
        let response = harness
            .server
            .put("/api/transactions/DS1234567890")
            .json(&json!({ "status": status }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Transaction status updated");

        let response = harness.server.get("/api/transactions/DS1234567890").await;
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], status);
    }
}

#[tokio::test]
async fn update_status_alias_route_works() {
    let harness = TestHarness::new_empty();
    insert_order(&harness, "DS1234567890", 15_000).await;

    let response = harness
        .server
        .put("/api/transactions/DS1234567890/status")
        .json(&json!({ "status": "Failed" }))
        .await;

    response.assert_status_ok();

    let response = harness.server.get("/api/transactions/DS1234567890").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "Failed");
}

#[tokio::test]
async fn update_status_missing_field_bad_request() {
    let harness = TestHarness::new_empty();
    insert_order(&harness, "DS1234567890", 15_000).await;

    let response = harness
        .server
        .put("/api/transactions/DS1234567890")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Status is required");
}

#[tokio::test]
async fn update_status_unknown_label_bad_request() {
    let harness = TestHarness::new_empty();
    insert_order(&harness, "DS1234567890", 15_000).await;

    let response = harness
        .server
        .put("/api/transactions/DS1234567890")
        .json(&json!({ "status": "Refunded" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_status_unknown_id_not_found() {
    let harness = TestHarness::new_empty();

    let response = harness
        .server
        .put("/api/transactions/DS0000000000")
        .json(&json!({ "status": "Processing" }))
        .await;

    response.assert_status_not_found();
}

// ============================================================================
// Deletion
// ============================================================================

#[tokio::test]
async fn delete_then_get_not_found() {
    let harness = TestHarness::new_empty();
    insert_order(&harness, "DS1234567890", 15_000).await;

    let response = harness.server.delete("/api/transactions/DS1234567890").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Transaction deleted");

    harness
        .server
        .get("/api/transactions/DS1234567890")
        .await
        .assert_status_not_found();

    // Deleting again also misses.
    harness
        .server
        .delete("/api/transactions/DS1234567890")
        .await
        .assert_status_not_found();
}
