use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::routes::render_template;
use tera::Tera;

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::{page_context, redirect_to_index};
use crate::services::PageOutcome;
use crate::services::products::{self, ProductFormPage, ProductsQuery, SearchQuery};

#[get("/products")]
pub async fn show_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = products::load_products(repo.get_ref(), params.into_inner());

    let mut context = page_context(&flash_messages, "products");
    context.insert("products", &data.products);
    context.insert("status", &data.status);
    render_template(&tera, "products/index.html", &context)
}

#[get("/products/search")]
pub async fn search_products(
    params: web::Query<SearchQuery>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match products::search_products(repo.get_ref(), params.into_inner()) {
        PageOutcome::Render(matches) => {
            let mut context = tera::Context::new();
            context.insert("products", &matches);
            render_template(&tera, "products/_list.html", &context)
        }
        PageOutcome::Redirect(target) => redirect_to_index(target),
    }
}

#[get("/products/create")]
pub async fn show_create_product(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let outcome = products::show_create_form(repo.get_ref());
    render_form(outcome, &flash_messages, &tera, "/products/create")
}

#[post("/products/create")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    let outcome = products::create_product(repo.get_ref(), form);
    render_form(outcome, &flash_messages, &tera, "/products/create")
}

#[get("/products/{product_id}/update")]
pub async fn show_update_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = path.into_inner();
    let outcome = products::show_update_form(repo.get_ref(), product_id);
    render_form(
        outcome,
        &flash_messages,
        &tera,
        &format!("/products/{product_id}/update"),
    )
}

#[post("/products/{product_id}/update")]
pub async fn update_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();
    let outcome = products::update_product(repo.get_ref(), product_id, form);
    render_form(
        outcome,
        &flash_messages,
        &tera,
        &format!("/products/{product_id}/update"),
    )
}

#[get("/products/{product_id}/delete")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();
    redirect_to_index(products::delete_product(repo.get_ref(), product_id))
}

fn render_form(
    outcome: PageOutcome<ProductFormPage>,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
    action: &str,
) -> HttpResponse {
    match outcome {
        PageOutcome::Render(page) => {
            let mut context = page_context(flash_messages, "products");
            context.insert("model", &page.model);
            context.insert("status", &page.status);
            context.insert("action", action);
            render_template(tera, "products/form.html", &context)
        }
        PageOutcome::Redirect(target) => redirect_to_index(target),
    }
}
