//! Product repository
//!
//! - insert: INSERT ... RETURNING (id assigned by SQLite)
//! - list: ascending id, LIMIT/OFFSET
//! - update: load, merge, write back inside one transaction

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{Product, ProductCreate, ProductUpdate, Window};

const RESOURCE: &str = "Product";

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a product and return it with its assigned id.
    pub async fn insert(&self, new: ProductCreate) -> Result<Product, DbError> {
        let product: Product = sqlx::query_as(
            r#"
            INSERT INTO products (title, quantity, description, price)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, quantity, description, price
            "#,
        )
        .bind(&new.title)
        .bind(new.quantity)
        .bind(&new.description)
        .bind(new.price)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(product_id = product.id, "product created");
        Ok(product)
    }

    /// List products in ascending id order.
    pub async fn list(&self, window: Window) -> Result<Vec<Product>, DbError> {
        let products: Vec<Product> = sqlx::query_as(
            r#"
            SELECT id, title, quantity, description, price
            FROM products
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(window.limit)
        .bind(window.skip)
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(
            skip = window.skip,
            limit = window.limit,
            returned = products.len(),
            "listed products"
        );
        Ok(products)
    }

    /// Get a single product by id.
    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, quantity, description, price
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Apply a partial update and return the merged record.
    ///
    /// The read and the write share a transaction; an early `NotFound`
    /// return drops it, which rolls back.
    pub async fn update(&self, id: i64, changes: ProductUpdate) -> Result<Product, DbError> {
        let mut tx = self.pool.begin().await?;

        let mut product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, quantity, description, price
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found(id))?;

        if changes.is_empty() {
            return Ok(product);
        }

        changes.apply(&mut product);

        sqlx::query(
            r#"
            UPDATE products
            SET title = ?, quantity = ?, description = ?, price = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.title)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(product_id = id, "product updated");
        Ok(product)
    }

    /// Delete a product by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }

    /// Total number of stored products.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
