use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Supplier delivering products; read-only from the product form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new supplier.
#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl NewSupplier {
    /// Create a supplier payload stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when renaming an existing supplier.
#[derive(Debug, Clone)]
pub struct UpdateSupplier {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl UpdateSupplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
