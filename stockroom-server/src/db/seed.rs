//! One-time sample data for a fresh database

use sqlx::SqlitePool;

use super::DbError;
use crate::models::ProductCreate;

/// Number of sample products inserted into a fresh store
pub const SAMPLE_COUNT: i64 = 10;

/// The `n`th sample product (1-based).
pub fn sample_product(n: i64) -> ProductCreate {
    ProductCreate {
        title: format!("Product {}", n),
        quantity: 10,
        description: format!("Description {}", n),
        price: 10.0 * n as f64,
    }
}

/// Insert the sample products if the store has never held a product.
///
/// "Never" is read from `sqlite_sequence`: AUTOINCREMENT keeps its row for
/// `products` after the first insert, even once every product is deleted.
/// The check and the inserts share a `BEGIN IMMEDIATE` transaction so two
/// processes bootstrapping the same file can't both seed.
///
/// Returns how many rows were inserted (0 when the store was already used).
pub async fn seed_if_fresh(pool: &SqlitePool) -> Result<u64, DbError> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let (used,): (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM sqlite_sequence WHERE name = 'products')",
    )
    .fetch_one(&mut *tx)
    .await?;

    if used {
        tracing::info!("products table already populated once, skipping seed");
        return Ok(0);
    }

    for n in 1..=SAMPLE_COUNT {
        let product = sample_product(n);
        sqlx::query(
            "INSERT INTO products (title, quantity, description, price) VALUES (?, ?, ?, ?)",
        )
        .bind(&product.title)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(product.price)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count = SAMPLE_COUNT, "seeded sample products");
    Ok(SAMPLE_COUNT as u64)
}
