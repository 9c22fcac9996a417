//! Database layer - connection pool, schema, seeding and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no global handle; the pool lives in `AppState`
//! - Connections are checked out per call and released on drop
//! - Missing rows are a tagged `DbError::NotFound`
//! - Transactions for read-modify-write

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::{
    create_memory_pool, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS,
};
pub use repos::*;
pub use seed::seed_if_fresh;

use sqlx::SqlitePool;

/// Create the schema and, if `seed` is set, fill a never-used table with samples.
///
/// Returns the number of sample rows inserted.
pub async fn bootstrap(pool: &SqlitePool, seed: bool) -> Result<u64, DbError> {
    migrations::run(pool).await?;
    if !seed {
        return Ok(0);
    }
    seed_if_fresh(pool).await
}
