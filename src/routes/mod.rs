use actix_web::HttpResponse;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use pushkind_common::routes::redirect;
use serde::Serialize;
use tera::Context;

use crate::services::IndexRedirect;

pub mod api;
pub mod main;
pub mod products;

/// Location of the product list page.
pub const PRODUCTS_INDEX: &str = "/products";

/// Flash message prepared for the `alerts` block of the base template.
#[derive(Debug, Serialize)]
struct Alert {
    /// Bootstrap contextual class (`danger`, `success`, ...).
    level: &'static str,
    message: String,
}

/// Build the template context shared by every page.
pub fn page_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_level(message.level()),
            message: message.content().to_string(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Redirect to the product list, flashing the error carried by `target`.
pub fn redirect_to_index(target: IndexRedirect) -> HttpResponse {
    if let Some(message) = target.message {
        FlashMessage::error(message).send();
    }
    redirect(PRODUCTS_INDEX)
}

fn alert_level(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}
