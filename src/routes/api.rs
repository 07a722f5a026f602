use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::products::{SearchQuery, search_summaries};

#[get("/v1/products")]
/// Return a JSON list of product summaries whose names contain `value`.
///
/// Unlike the HTML search, an empty catalog yields an empty array and storage
/// failures answer `500 Internal Server Error`.
pub async fn api_v1_products(
    params: web::Query<SearchQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match search_summaries(repo.get_ref(), params.into_inner()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
