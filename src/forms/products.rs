use pushkind_common::routes::empty_string_as_none;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, Product, UpdateProduct};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a product description.
const DESCRIPTION_MAX_LEN: usize = 2048;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = DESCRIPTION_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
}

/// Form payload submitted from the create and update product pages.
///
/// The same struct is echoed back into the template so a rejected submission
/// keeps the values the user entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    /// Identifier of the edited product. The update handler overwrites it with
    /// the identifier taken from the route.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default, deserialize_with = "lenient_id")]
    pub category_id: i32,
    #[validate(range(min = 1))]
    #[serde(default, deserialize_with = "lenient_id")]
    pub manufacturer_id: i32,
    #[validate(range(min = 1))]
    #[serde(default, deserialize_with = "lenient_id")]
    pub supplier_id: i32,
}

/// Sanitized field values extracted from a valid [`ProductForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub manufacturer_id: i32,
    pub supplier_id: i32,
}

impl ProductForm {
    /// Sanitizes the submitted values and runs the field rules against them.
    pub fn validated(&self) -> ProductFormResult<ProductFields> {
        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let sanitized = ProductForm {
            id: self.id,
            name,
            description,
            category_id: self.category_id,
            manufacturer_id: self.manufacturer_id,
            supplier_id: self.supplier_id,
        };
        sanitized.validate()?;

        Ok(ProductFields {
            name: sanitized.name,
            description: sanitized.description,
            category_id: sanitized.category_id,
            manufacturer_id: sanitized.manufacturer_id,
            supplier_id: sanitized.supplier_id,
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            category_id: product.category_id,
            manufacturer_id: product.manufacturer_id,
            supplier_id: product.supplier_id,
        }
    }
}

impl ProductFields {
    pub fn into_new_product(self) -> NewProduct {
        let new_product = NewProduct::new(
            self.name,
            self.category_id,
            self.manufacturer_id,
            self.supplier_id,
        );

        match self.description {
            Some(description) => new_product.with_description(description),
            None => new_product,
        }
    }

    pub fn into_update_product(self) -> UpdateProduct {
        UpdateProduct::new(
            self.name,
            self.description,
            self.category_id,
            self.manufacturer_id,
            self.supplier_id,
        )
    }
}

/// Reads a select box value, mapping empty or non-numeric input to `0` so the
/// range rule reports it instead of the extractor.
fn lenient_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}

/// Collapses whitespace runs into single spaces and drops control characters.
fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitizes each line and trims blank lines from both ends.
fn sanitize_multiline_text(input: &str) -> String {
    let lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);

    // Keep at most one blank line between paragraphs.
    let mut result: Vec<&str> = Vec::with_capacity(last - first + 1);
    for line in &lines[first..=last] {
        if line.is_empty() && result.last().is_some_and(|prev| prev.is_empty()) {
            continue;
        }
        result.push(line.as_str());
    }

    result.join("\n")
}
