//! Command implementations for stockroom CLI

pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_serve;

/// Database used when neither `--database-url` nor `DATABASE_URL` is set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://stockroom.db";
