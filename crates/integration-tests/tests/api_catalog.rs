//! Integration tests for the catalog API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p verdant-api)
//!
//! Run with: cargo test -p verdant-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use verdant_integration_tests::{api_base_url, client, db_pool};

/// Test helper: create a category and return its id.
async fn create_test_category(client: &reqwest::Client, base_url: &str) -> String {
    let slug = format!("test-{}", Uuid::new_v4().simple());
    let body: Value = client
        .post(format!("{base_url}/api/categories"))
        .json(&json!({ "name": "Test Category", "slug": slug }))
        .send()
        .await
        .expect("create category")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);
    body["data"]["id"].as_str().expect("category id").to_string()
}

/// Test helper: create a product and return its id.
async fn create_test_product(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    category_id: Option<&str>,
) -> String {
    let body: Value = client
        .post(format!("{base_url}/api/products"))
        .json(&json!({ "name": name, "price": "9.99", "category_id": category_id }))
        .send()
        .await
        .expect("create product")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);
    body["data"]["id"].as_str().expect("product id").to_string()
}

// ============================================================================
// List & Filter Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_product_list_filters_by_category() {
    let client = client();
    let base_url = api_base_url();

    let category_id = create_test_category(&client, &base_url).await;
    let in_category =
        create_test_product(&client, &base_url, "In Category", Some(&category_id)).await;
    let outside = create_test_product(&client, &base_url, "Outside", None).await;

    let body: Value = client
        .get(format!("{base_url}/api/products?category_id={category_id}"))
        .send()
        .await
        .expect("list products")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);

    let ids: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert!(ids.contains(&in_category.as_str()));
    assert!(!ids.contains(&outside.as_str()));
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_customer_create_and_list() {
    let client = client();
    let base_url = api_base_url();
    let email = format!("test-{}@example.com", Uuid::new_v4().simple());

    let body: Value = client
        .post(format!("{base_url}/api/customers"))
        .json(&json!({ "email": email, "first_name": "Test", "last_name": "Customer" }))
        .send()
        .await
        .expect("create customer")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], email.as_str());

    // Newest first: our customer should be at or near the top
    let body: Value = client
        .get(format!("{base_url}/api/customers"))
        .send()
        .await
        .expect("list customers")
        .json()
        .await
        .expect("parse body");
    let found = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .any(|c| c["email"] == email.as_str());
    assert!(found);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_duplicate_customer_email_conflicts() {
    let client = client();
    let base_url = api_base_url();
    let email = format!("dup-{}@example.com", Uuid::new_v4().simple());
    let payload = json!({ "email": email, "first_name": "Dup", "last_name": "Customer" });

    let resp = client
        .post(format!("{base_url}/api/customers"))
        .json(&payload)
        .send()
        .await
        .expect("first create");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/api/customers"))
        .json(&payload)
        .send()
        .await
        .expect("second create");
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], false);
}

// ============================================================================
// Soft Delete Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_soft_deleted_product_disappears_from_lists() {
    let client = client();
    let base_url = api_base_url();

    let category_id = create_test_category(&client, &base_url).await;
    let product_id =
        create_test_product(&client, &base_url, "Soon Deleted", Some(&category_id)).await;

    // No route soft-deletes, so mark the row directly
    let pool = db_pool().await;
    sqlx::query("UPDATE product SET deleted_at = NOW() WHERE id = $1")
        .bind(Uuid::parse_str(&product_id).expect("product uuid"))
        .execute(&pool)
        .await
        .expect("mark product deleted");

    // Gone from the unfiltered list
    let body: Value = client
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .expect("list products")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);
    let found = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .any(|p| p["id"] == product_id.as_str());
    assert!(!found);

    // Gone from the category-filtered list too
    let body: Value = client
        .get(format!("{base_url}/api/products?category_id={category_id}"))
        .send()
        .await
        .expect("list products by category")
        .json()
        .await
        .expect("parse body");
    let found = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .any(|p| p["id"] == product_id.as_str());
    assert!(!found);
}

// ============================================================================
// By-Ids Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_products_by_ids_preserves_input_order() {
    let client = client();
    let base_url = api_base_url();

    let first = create_test_product(&client, &base_url, "First", None).await;
    let second = create_test_product(&client, &base_url, "Second", None).await;
    let missing = Uuid::new_v4().to_string();

    // Request in reverse creation order, with one unmatched id in the middle
    let body: Value = client
        .post(format!("{base_url}/api/products/by-ids"))
        .json(&json!({ "ids": [second, missing, first] }))
        .send()
        .await
        .expect("by-ids")
        .json()
        .await
        .expect("parse body");
    assert_eq!(body["success"], true);

    let ids: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_products_by_ids_empty_is_rejected() {
    let client = client();
    let base_url = api_base_url();

    let resp = client
        .post(format!("{base_url}/api/products/by-ids"))
        .json(&json!({ "ids": [] }))
        .send()
        .await
        .expect("by-ids");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("parse body");
    assert_eq!(body["success"], false);
}
