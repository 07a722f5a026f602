use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::manufacturer::{
    Manufacturer as DomainManufacturer, NewManufacturer as DomainNewManufacturer,
    UpdateManufacturer as DomainUpdateManufacturer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::manufacturers)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::manufacturers)]
pub struct NewManufacturer<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::manufacturers)]
pub struct UpdateManufacturer<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Manufacturer> for DomainManufacturer {
    fn from(value: Manufacturer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewManufacturer> for NewManufacturer<'a> {
    fn from(value: &'a DomainNewManufacturer) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateManufacturer> for UpdateManufacturer<'a> {
    fn from(value: &'a DomainUpdateManufacturer) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
