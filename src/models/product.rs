use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub manufacturer_id: i32,
    pub supplier_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category_id: i32,
    pub manufacturer_id: i32,
    pub supplier_id: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category_id: i32,
    pub manufacturer_id: i32,
    pub supplier_id: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            category_id: value.category_id,
            manufacturer_id: value.manufacturer_id,
            supplier_id: value.supplier_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            category_id: value.category_id,
            manufacturer_id: value.manufacturer_id,
            supplier_id: value.supplier_id,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            category_id: value.category_id,
            manufacturer_id: value.manufacturer_id,
            supplier_id: value.supplier_id,
            updated_at: value.updated_at,
        }
    }
}
