//! Product record and its request shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored product, as returned by every read and write endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub quantity: i64,
    pub description: String,
    pub price: f64,
}

/// Body of `POST /products/` - every field is required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    pub quantity: i64,
    pub description: String,
    pub price: f64,
}

/// Body of `PUT /products/{id}`.
///
/// `None` means "leave unchanged". An explicit `null` deserializes to `None`
/// as well; empty strings and zeroes are real values and get written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    /// True if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.quantity.is_none()
            && self.description.is_none()
            && self.price.is_none()
    }

    /// Overwrite the fields of `product` that this update supplies.
    pub fn apply(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}
