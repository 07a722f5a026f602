use actix_web::{Responder, get};
use pushkind_common::routes::redirect;

use crate::routes::PRODUCTS_INDEX;

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect(PRODUCTS_INDEX)
}
