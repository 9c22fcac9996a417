//! stockroom-server: product records over HTTP
//!
//! CRUD endpoints for a single `Product` entity backed by SQLite.

pub mod db;
pub mod http;
pub mod models;

pub use db::{bootstrap, create_pool, DbError, ProductRepo};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{Product, ProductCreate, ProductUpdate};
