//! Integration tests for the settings API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p verdant-api)
//!
//! Run with: cargo test -p verdant-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use verdant_integration_tests::{api_base_url, client};

/// Unique settings key per test run so parallel runs don't collide.
fn test_key(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

// ============================================================================
// Upsert Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_upsert_same_key_twice_keeps_one_record() {
    let client = client();
    let base_url = api_base_url();
    let key = test_key("homepage_test");

    // First upsert
    let resp = client
        .post(format!("{base_url}/api/settings"))
        .json(&json!({ "key": key, "tab": "homepage", "data": { "sections": [] } }))
        .send()
        .await
        .expect("first upsert");
    assert_eq!(resp.status(), StatusCode::OK);

    // Second upsert with new data replaces the first wholesale
    let resp = client
        .post(format!("{base_url}/api/settings"))
        .json(&json!({
            "key": key,
            "tab": "homepage",
            "data": { "sections": [{ "id": "hero", "title": "Hero" }] }
        }))
        .send()
        .await
        .expect("second upsert");
    assert_eq!(resp.status(), StatusCode::OK);

    // Exactly one record with that key, reflecting the latest data
    let body: Value = client
        .get(format!("{base_url}/api/settings?tab=homepage"))
        .send()
        .await
        .expect("list settings")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);

    let matching: Vec<&Value> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter(|r| r["key"] == key.as_str())
        .collect();
    assert_eq!(matching.len(), 1);
    let record = matching.first().expect("one record");
    assert_eq!(record["data"]["sections"][0]["id"], "hero");

    // Cleanup
    let _ = client
        .delete(format!("{base_url}/api/settings/{key}"))
        .send()
        .await;
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_upsert_missing_key_is_rejected() {
    let client = client();
    let base_url = api_base_url();

    let resp = client
        .post(format!("{base_url}/api/settings"))
        .json(&json!({ "key": "  ", "tab": "homepage", "data": {} }))
        .send()
        .await
        .expect("upsert");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().expect("message").contains("key"));
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_delete_nonexistent_key_succeeds() {
    let client = client();
    let base_url = api_base_url();
    let key = test_key("never_created");

    let resp = client
        .delete(format!("{base_url}/api/settings/{key}"))
        .send()
        .await
        .expect("delete");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], true);
}

// ============================================================================
// Typed Domain Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_homepage_domain_roundtrip() {
    let client = client();
    let base_url = api_base_url();

    let payload = json!({
        "sections": [
            { "id": "featured", "title": "Featured", "product_ids": [] }
        ]
    });

    let resp = client
        .put(format!("{base_url}/api/settings/domains/homepage"))
        .json(&payload)
        .send()
        .await
        .expect("put homepage");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = client
        .get(format!("{base_url}/api/settings/domains/homepage"))
        .send()
        .await
        .expect("get homepage")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["sections"][0]["id"], "featured");
}

// ============================================================================
// Tab Filter Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_list_filters_by_tab() {
    let client = client();
    let base_url = api_base_url();
    let key = test_key("calculation_test");

    let resp = client
        .post(format!("{base_url}/api/settings"))
        .json(&json!({ "key": key, "tab": "calculation", "data": { "cost_categories": [] } }))
        .send()
        .await
        .expect("upsert");
    assert_eq!(resp.status(), StatusCode::OK);

    // Listing a different tab must not include the record
    let body: Value = client
        .get(format!("{base_url}/api/settings?tab=product_cost"))
        .send()
        .await
        .expect("list settings")
        .json()
        .await
        .expect("parse body");
    let found = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .any(|r| r["key"] == key.as_str());
    assert!(!found);

    // Cleanup
    let _ = client
        .delete(format!("{base_url}/api/settings/{key}"))
        .send()
        .await;
}
