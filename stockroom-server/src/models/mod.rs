//! Domain models and request shapes
//!
//! Malformed input is rejected while extracting these types,
//! before any handler or repository runs.

pub mod pagination;
pub mod product;
pub mod validation;

pub use pagination::{Window, WindowParams};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use validation::ValidationError;
