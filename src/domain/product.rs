use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name, unique among all products.
    pub name: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Category the product belongs to.
    pub category_id: i32,
    /// Manufacturer producing the product.
    pub manufacturer_id: i32,
    /// Supplier delivering the product.
    pub supplier_id: i32,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub manufacturer_id: i32,
    pub supplier_id: i32,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied associations and current timestamp.
    pub fn new(
        name: impl Into<String>,
        category_id: i32,
        manufacturer_id: i32,
        supplier_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            category_id,
            manufacturer_id,
            supplier_id,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Full replacement data applied when updating an existing product.
///
/// Every column is overwritten; a `None` description clears the stored value.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub manufacturer_id: i32,
    pub supplier_id: i32,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateProduct {
    /// Build an update payload with the supplied values and current timestamp.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        category_id: i32,
        manufacturer_id: i32,
        supplier_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            category_id,
            manufacturer_id,
            supplier_id,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}
