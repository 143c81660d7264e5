//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (pings the database)
//!
//! # Settings
//! GET    /api/settings            - List settings records (?tab= filter)
//! POST   /api/settings            - Upsert a settings record by key
//! DELETE /api/settings/{key}      - Delete a settings record (idempotent)
//! GET/PUT /api/settings/domains/homepage     - Typed homepage document
//! GET/PUT /api/settings/domains/calculation  - Typed calculation document
//! GET/PUT /api/settings/domains/product-cost - Typed product-cost document
//!
//! # Catalog
//! GET  /api/categories            - List categories
//! POST /api/categories            - Create a category
//! GET  /api/customers             - List customers
//! POST /api/customers             - Create a customer
//! GET  /api/discounts             - List discounts
//! POST /api/discounts             - Create a discount
//! GET  /api/products              - List products (?category_id= filter)
//! POST /api/products              - Create a product
//! POST /api/products/by-ids       - Fetch products in caller-specified order
//!
//! # Storage
//! POST /api/storage/signed-urls   - Issue time-limited object URLs
//! ```
//!
//! Every response uses the JSON envelope from [`crate::response`].

pub mod categories;
pub mod customers;
pub mod discounts;
pub mod products;
pub mod settings;
pub mod storage;

use axum::Router;

use crate::state::AppState;

/// Build the combined API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(settings::router())
        .merge(categories::router())
        .merge(customers::router())
        .merge(discounts::router())
        .merge(products::router())
        .merge(storage::router())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use secrecy::SecretString;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::ApiConfig;
    use crate::state::AppState;

    use super::*;

    fn test_state() -> AppState {
        let config = ApiConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            base_url: "http://localhost:4000".to_string(),
            storage_secret: SecretString::from("x".repeat(32)),
            sentry_dsn: None,
            sentry_environment: None,
        };
        // Lazy pool: these requests are rejected at extraction, before any
        // handler touches the database.
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost/test").unwrap();
        AppState::new(config, pool)
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let response = routes()
            .with_state(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_body_field_yields_envelope_400() {
        // A body without `key` must fail like any other validation error,
        // not with the extractor's plain-text 422
        let (status, body) = post_json("/api/settings", r#"{"tab":"homepage","data":{}}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], Value::Bool(false));
        assert!(body["message"].as_str().unwrap().contains("key"));
    }

    #[tokio::test]
    async fn test_missing_ids_field_yields_envelope_400() {
        let (status, body) = post_json("/api/products/by-ids", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], Value::Bool(false));
        assert!(body["message"].as_str().unwrap().contains("ids"));
    }

    #[tokio::test]
    async fn test_malformed_json_body_yields_envelope_400() {
        let (status, body) = post_json("/api/storage/signed-urls", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], Value::Bool(false));
    }
}
