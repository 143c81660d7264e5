//! Integration tests for Verdant Market.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p verdant-cli -- migrate
//!
//! # Start the API server
//! cargo run -p verdant-api
//!
//! # Run integration tests
//! cargo test -p verdant-integration-tests -- --ignored
//! ```
//!
//! Tests that need live services are `#[ignore]`d so `cargo test` stays
//! green without them.

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

/// Build an HTTP client for API tests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Connect directly to the test database, for fixtures the API has no
/// route for (e.g. marking rows soft-deleted).
///
/// # Panics
///
/// Panics if neither `VERDANT_DATABASE_URL` nor `DATABASE_URL` is set, or
/// the connection fails.
pub async fn db_pool() -> sqlx::PgPool {
    let database_url = std::env::var("VERDANT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("VERDANT_DATABASE_URL or DATABASE_URL must be set");
    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}
