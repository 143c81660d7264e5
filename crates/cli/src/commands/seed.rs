//! Demo data seeding for local development.
//!
//! Inserts a small catalog (one category, a few products, a discount) and
//! a default homepage settings document. Rows that already exist are left
//! alone, so the command is safe to re-run.

use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{CommandError, connect};

/// Seed the database with demo catalog data.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    tracing::info!("Connecting to database...");
    let pool = connect().await?;

    seed_catalog(&pool).await?;
    seed_settings(&pool).await?;

    tracing::info!("Seed complete!");
    Ok(())
}

async fn seed_catalog(pool: &PgPool) -> Result<(), CommandError> {
    sqlx::query(
        r"
        INSERT INTO category (name, slug, description)
        VALUES ($1, $2, $3)
        ON CONFLICT (slug) DO NOTHING
        ",
    )
    .bind("Pantry")
    .bind("pantry")
    .bind("Staples and dry goods")
    .execute(pool)
    .await?;

    let products = [
        ("Olive Oil 500ml", Decimal::new(1250, 2)),
        ("Sea Salt Flakes", Decimal::new(450, 2)),
        ("Wildflower Honey", Decimal::new(899, 2)),
    ];

    for (name, price) in products {
        sqlx::query(
            r"
            INSERT INTO product (name, price, category_id)
            SELECT $1, $2, id FROM category
            WHERE slug = 'pantry'
              AND NOT EXISTS (SELECT 1 FROM product WHERE name = $1)
            ",
        )
        .bind(name)
        .bind(price)
        .execute(pool)
        .await?;
    }

    // Random suffix so re-seeding against a shared database doesn't collide
    let suffix: u32 = rand::rng().random_range(1000..10000);
    sqlx::query(
        r"
        INSERT INTO discount (code, percent_off)
        VALUES ($1, $2)
        ON CONFLICT (code) DO NOTHING
        ",
    )
    .bind(format!("WELCOME{suffix}"))
    .bind(Decimal::new(10, 0))
    .execute(pool)
    .await?;

    tracing::info!("Catalog seeded");
    Ok(())
}

async fn seed_settings(pool: &PgPool) -> Result<(), CommandError> {
    let homepage = serde_json::json!({
        "sections": [
            { "id": "featured", "title": "Featured", "product_ids": [] }
        ]
    });

    sqlx::query(
        r"
        INSERT INTO setting (key, tab, data)
        VALUES ($1, $2, $3)
        ON CONFLICT (key) DO NOTHING
        ",
    )
    .bind("homepage_v1")
    .bind("homepage")
    .bind(&homepage)
    .execute(pool)
    .await?;

    tracing::info!("Settings seeded");
    Ok(())
}
