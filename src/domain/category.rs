use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Category a product is filed under; one of the lookup sets shown on the product form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when renaming an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub name: String,
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
