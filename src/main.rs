use std::env;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;
use tera::Tera;

use product_catalog::repository::DieselRepository;
use product_catalog::routes::api::api_v1_products;
use product_catalog::routes::main::show_index;
use product_catalog::routes::products::{
    create_product, delete_product, search_products, show_create_product, show_products,
    show_update_product, update_product,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());
    let templates_dir = env::var("TEMPLATES_DIR").unwrap_or("templates".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(secret) => match Key::try_from(secret.as_bytes()) {
            Ok(key) => key,
            Err(e) => {
                log::warn!("SECRET_KEY is unusable ({e}), generating a random key");
                Key::generate()
            }
        },
        Err(_) => Key::generate(),
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new(&format!("{templates_dir}/**/*")) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    log::info!("Serving product catalog on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_products))
            .service(show_index)
            .service(show_products)
            .service(search_products)
            .service(show_create_product)
            .service(create_product)
            .service(show_update_product)
            .service(update_product)
            .service(delete_product)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
