use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{
    category::Category, manufacturer::Manufacturer, product::Product, supplier::Supplier,
};
use crate::forms::products::ProductForm;
use crate::repository::{DataReader, DataWriter};
use crate::services::{IndexRedirect, PageOutcome, ServiceError, ServiceResult, StatusMessage};

pub const PRODUCTS_LOAD_FAILED: &str = "Lose ucitani proizvodi";
pub const SEARCH_FAILED: &str = "Doslo je do greske prilikom pretrage";
pub const CREATE_FORM_UNAVAILABLE: &str = "Greska";
pub const UPDATE_FORM_UNAVAILABLE: &str = "Doslo je do greske";
pub const INVALID_INPUT: &str = "Pogresno ste uneli neku vrednost";
pub const DUPLICATE_NAME: &str = "Postoji vec proizvod sa datim imenom!";
pub const CREATE_FAILED: &str = "Doslo je do greske prilikom unosa proizvoda!";
pub const CREATE_SUCCEEDED: &str = "Uspesno ste dodali proizvod!";
pub const UPDATE_FAILED: &str = "Doslo je do greske prilikom izmene proizvoda!";
pub const UPDATE_SUCCEEDED: &str = "Uspesno ste izmenili proizvod";
pub const DELETE_FAILED: &str = "Doslo je do greske prilikom brisanja proizvoda";

/// Query parameters accepted by the product list page.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional message to show above the list.
    pub message: Option<String>,
}

/// Query parameters accepted by the search fragment and the JSON API.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against product names.
    pub value: Option<String>,
}

/// Row shown in the product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub manufacturer_id: i32,
    pub supplier_id: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        let Product {
            id,
            name,
            description,
            category_id,
            manufacturer_id,
            supplier_id,
            updated_at,
            ..
        } = product;

        Self {
            id,
            name,
            description,
            category_id,
            manufacturer_id,
            supplier_id,
            updated_at,
        }
    }
}

/// Data required to render the product list.
#[derive(Debug, Serialize)]
pub struct ProductListPage {
    pub products: Vec<ProductSummary>,
    pub status: Option<StatusMessage>,
}

/// A product together with every lookup set its form needs.
#[derive(Debug, Serialize)]
pub struct ProductFormModel {
    pub product: ProductForm,
    pub categories: Vec<Category>,
    pub manufacturers: Vec<Manufacturer>,
    pub suppliers: Vec<Supplier>,
}

/// Data required to render the create or update form.
#[derive(Debug, Serialize)]
pub struct ProductFormPage {
    pub model: ProductFormModel,
    pub status: Option<StatusMessage>,
}

/// Bundles `product` with the categories, manufacturers and suppliers.
///
/// Returns `None` as soon as one of the lookup sets cannot be loaded.
pub fn build_form_model<R>(repo: &R, product: ProductForm) -> Option<ProductFormModel>
where
    R: DataReader<Category> + DataReader<Manufacturer> + DataReader<Supplier> + ?Sized,
{
    let categories = fetch_lookup::<Category, R>(repo, "categories")?;
    let manufacturers = fetch_lookup::<Manufacturer, R>(repo, "manufacturers")?;
    let suppliers = fetch_lookup::<Supplier, R>(repo, "suppliers")?;

    Some(ProductFormModel {
        product,
        categories,
        manufacturers,
        suppliers,
    })
}

/// Loads the product list page.
pub fn load_products<R>(repo: &R, query: ProductsQuery) -> ProductListPage
where
    R: DataReader<Product> + ?Sized,
{
    match fetch_products(repo) {
        Some(products) if !products.is_empty() => ProductListPage {
            products: products.into_iter().map(ProductSummary::from).collect(),
            status: query
                .message
                .filter(|message| !message.trim().is_empty())
                .map(StatusMessage::failure),
        },
        _ => ProductListPage {
            products: Vec::new(),
            status: Some(StatusMessage::failure(PRODUCTS_LOAD_FAILED)),
        },
    }
}

/// Filters the product list by name for the search fragment.
pub fn search_products<R>(repo: &R, query: SearchQuery) -> PageOutcome<Vec<ProductSummary>>
where
    R: DataReader<Product> + ?Sized,
{
    let products = match fetch_products(repo) {
        Some(products) if !products.is_empty() => products,
        _ => return PageOutcome::Redirect(IndexRedirect::with_message(SEARCH_FAILED)),
    };

    let value = query.value.unwrap_or_default();
    let matches = filter_by_name(products, &value)
        .into_iter()
        .map(ProductSummary::from)
        .collect();

    PageOutcome::Render(matches)
}

/// Same filter as [`search_products`], but repository failures are returned
/// to the caller instead of being turned into a redirect.
pub fn search_summaries<R>(repo: &R, query: SearchQuery) -> ServiceResult<Vec<ProductSummary>>
where
    R: DataReader<Product> + ?Sized,
{
    let products = repo.fetch_all().map_err(ServiceError::from)?;
    let value = query.value.unwrap_or_default();

    Ok(filter_by_name(products, &value)
        .into_iter()
        .map(ProductSummary::from)
        .collect())
}

/// Keeps the products whose name contains `value`, ignoring case.
/// An empty `value` keeps everything.
pub fn filter_by_name(products: Vec<Product>, value: &str) -> Vec<Product> {
    let needle = value.to_lowercase();

    products
        .into_iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// Prepares an empty create form.
pub fn show_create_form<R>(repo: &R) -> PageOutcome<ProductFormPage>
where
    R: DataReader<Category> + DataReader<Manufacturer> + DataReader<Supplier> + ?Sized,
{
    match build_form_model(repo, ProductForm::default()) {
        Some(model) => PageOutcome::Render(ProductFormPage {
            model,
            status: None,
        }),
        None => PageOutcome::Redirect(IndexRedirect::with_message(CREATE_FORM_UNAVAILABLE)),
    }
}

/// Validates and stores a new product, then re-renders the form with the result.
pub fn create_product<R>(repo: &R, form: ProductForm) -> PageOutcome<ProductFormPage>
where
    R: DataReader<Product>
        + DataWriter<Product>
        + DataReader<Category>
        + DataReader<Manufacturer>
        + DataReader<Supplier>
        + ?Sized,
{
    let Some(model) = build_form_model(repo, form) else {
        return PageOutcome::Redirect(IndexRedirect::with_message(CREATE_FORM_UNAVAILABLE));
    };

    let status = submit_new_product(repo, &model.product);

    PageOutcome::Render(ProductFormPage {
        model,
        status: Some(status),
    })
}

/// Prepares the update form populated with the stored product.
pub fn show_update_form<R>(repo: &R, product_id: i32) -> PageOutcome<ProductFormPage>
where
    R: DataReader<Product>
        + DataReader<Category>
        + DataReader<Manufacturer>
        + DataReader<Supplier>
        + ?Sized,
{
    let model = fetch_product(repo, product_id)
        .and_then(|product| build_form_model(repo, ProductForm::from(&product)));

    match model {
        Some(model) => PageOutcome::Render(ProductFormPage {
            model,
            status: None,
        }),
        None => PageOutcome::Redirect(IndexRedirect::with_message(UPDATE_FORM_UNAVAILABLE)),
    }
}

/// Validates and stores changes to product `product_id`, then re-renders the
/// form with the result. Any identifier carried by the form is replaced.
pub fn update_product<R>(
    repo: &R,
    product_id: i32,
    mut form: ProductForm,
) -> PageOutcome<ProductFormPage>
where
    R: DataReader<Product>
        + DataWriter<Product>
        + DataReader<Category>
        + DataReader<Manufacturer>
        + DataReader<Supplier>
        + ?Sized,
{
    form.id = Some(product_id);

    let Some(model) = build_form_model(repo, form) else {
        return PageOutcome::Redirect(IndexRedirect::with_message(UPDATE_FORM_UNAVAILABLE));
    };

    let status = submit_product_update(repo, product_id, &model.product);

    PageOutcome::Render(ProductFormPage {
        model,
        status: Some(status),
    })
}

/// Deletes a product and tells the caller where to go next.
pub fn delete_product<R>(repo: &R, product_id: i32) -> IndexRedirect
where
    R: DataWriter<Product> + ?Sized,
{
    match repo.delete(product_id) {
        Ok(()) => {
            log::info!("Deleted product {product_id}");
            IndexRedirect::default()
        }
        Err(err) => {
            log::error!("Failed to delete product {product_id}: {err}");
            IndexRedirect::with_message(DELETE_FAILED)
        }
    }
}

fn submit_new_product<R>(repo: &R, form: &ProductForm) -> StatusMessage
where
    R: DataReader<Product> + DataWriter<Product> + ?Sized,
{
    let fields = match form.validated() {
        Ok(fields) => fields,
        Err(err) => {
            log::debug!("Rejected product form: {err}");
            return StatusMessage::failure(INVALID_INPUT);
        }
    };

    match name_taken(repo, &fields.name, None) {
        Ok(false) => {}
        Ok(true) => return StatusMessage::failure(DUPLICATE_NAME),
        Err(err) => {
            log::error!("Failed to check product name uniqueness: {err}");
            return StatusMessage::failure(CREATE_FAILED);
        }
    }

    match repo.add(&fields.into_new_product()) {
        Ok(product) => {
            log::info!("Created product {} ({})", product.id, product.name);
            StatusMessage::success(CREATE_SUCCEEDED)
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            StatusMessage::failure(CREATE_FAILED)
        }
    }
}

fn submit_product_update<R>(repo: &R, product_id: i32, form: &ProductForm) -> StatusMessage
where
    R: DataReader<Product> + DataWriter<Product> + ?Sized,
{
    let fields = match form.validated() {
        Ok(fields) => fields,
        Err(err) => {
            log::debug!("Rejected product form for {product_id}: {err}");
            return StatusMessage::failure(INVALID_INPUT);
        }
    };

    match name_taken(repo, &fields.name, Some(product_id)) {
        Ok(false) => {}
        Ok(true) => return StatusMessage::failure(DUPLICATE_NAME),
        Err(err) => {
            log::error!("Failed to check product name uniqueness: {err}");
            return StatusMessage::failure(UPDATE_FAILED);
        }
    }

    match repo.update(product_id, &fields.into_update_product()) {
        Ok(_) => StatusMessage::success(UPDATE_SUCCEEDED),
        Err(err) => {
            log::error!("Failed to update product {product_id}: {err}");
            StatusMessage::failure(UPDATE_FAILED)
        }
    }
}

/// Exact, case-sensitive comparison; `exclude_id` skips the product being edited.
fn name_taken<R>(repo: &R, name: &str, exclude_id: Option<i32>) -> ServiceResult<bool>
where
    R: DataReader<Product> + ?Sized,
{
    let products = repo.fetch_all().map_err(ServiceError::from)?;

    Ok(products
        .iter()
        .any(|product| product.name == name && Some(product.id) != exclude_id))
}

fn fetch_products<R>(repo: &R) -> Option<Vec<Product>>
where
    R: DataReader<Product> + ?Sized,
{
    match repo.fetch_all() {
        Ok(products) => Some(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            None
        }
    }
}

fn fetch_product<R>(repo: &R, product_id: i32) -> Option<Product>
where
    R: DataReader<Product> + ?Sized,
{
    match repo.fetch_by_id(product_id) {
        Ok(product) => product,
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            None
        }
    }
}

fn fetch_lookup<T, R>(repo: &R, label: &str) -> Option<Vec<T>>
where
    R: DataReader<T> + ?Sized,
{
    match repo.fetch_all() {
        Ok(items) => Some(items),
        Err(err) => {
            log::error!("Failed to load {label}: {err}");
            None
        }
    }
}
