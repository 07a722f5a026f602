use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Lookup record used to populate the manufacturer selection of the product form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new manufacturer.
#[derive(Debug, Clone)]
pub struct NewManufacturer {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl NewManufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when renaming an existing manufacturer.
#[derive(Debug, Clone)]
pub struct UpdateManufacturer {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl UpdateManufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
