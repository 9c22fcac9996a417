//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; connections are scoped to a single call
//! - Missing rows come back as `DbError::NotFound`, never as `Option`
//! - Uses transactions for read-modify-write operations

pub mod products;

pub use products::ProductRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
