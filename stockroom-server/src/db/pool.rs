//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. Each repository
//! call checks a connection out and returns it when the call finishes.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Default maximum connections for the pool.
/// Kept low since SQLite serializes writers anyway.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (`sqlite://path.db` or `sqlite::memory:`)
///
/// # Errors
///
/// Returns an error if the URL is invalid or the file can't be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://stockroom.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// In-memory databases live only as long as their connection, so they get
/// a single connection that is never reaped.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    if is_memory_url(database_url) {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    // Commits must hit disk before we answer the request
    let options = options
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Full);

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}

/// Fresh, empty in-memory database.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options("sqlite::memory:", 1).await
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
