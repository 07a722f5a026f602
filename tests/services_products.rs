use product_catalog::domain::product::Product;
use product_catalog::forms::products::ProductForm;
use product_catalog::repository::{DataReader, DieselRepository};
use product_catalog::services::products::{
    self, CREATE_SUCCEEDED, DUPLICATE_NAME, PRODUCTS_LOAD_FAILED, ProductsQuery, SearchQuery,
    UPDATE_SUCCEEDED,
};
use product_catalog::services::{IndexRedirect, PageOutcome, StatusMessage};

mod common;

fn form(name: &str, lookups: &common::Lookups) -> ProductForm {
    ProductForm {
        id: None,
        name: name.to_string(),
        description: None,
        category_id: lookups.category.id,
        manufacturer_id: lookups.manufacturer.id,
        supplier_id: lookups.supplier.id,
    }
}

fn status_of(outcome: PageOutcome<products::ProductFormPage>) -> Option<StatusMessage> {
    match outcome {
        PageOutcome::Render(page) => page.status,
        PageOutcome::Redirect(redirect) => panic!("unexpected redirect: {redirect:?}"),
    }
}

#[test]
fn create_update_search_and_delete_products() {
    let test_db = common::TestDb::new("service_product_workflow.db");
    let repo = DieselRepository::new(test_db.pool());
    let lookups = common::seed_lookups(&repo);

    let empty = products::load_products(&repo, ProductsQuery::default());
    assert_eq!(
        empty.status,
        Some(StatusMessage::failure(PRODUCTS_LOAD_FAILED))
    );

    let status = status_of(products::create_product(&repo, form("Apple", &lookups)));
    assert_eq!(status, Some(StatusMessage::success(CREATE_SUCCEEDED)));
    let status = status_of(products::create_product(&repo, form("Banana", &lookups)));
    assert_eq!(status, Some(StatusMessage::success(CREATE_SUCCEEDED)));

    let status = status_of(products::create_product(&repo, form("Apple", &lookups)));
    assert_eq!(status, Some(StatusMessage::failure(DUPLICATE_NAME)));

    let stored: Vec<Product> = repo.fetch_all().unwrap();
    assert_eq!(stored.len(), 2);
    let apple_id = stored[0].id;
    let banana_id = stored[1].id;

    let status = status_of(products::update_product(
        &repo,
        apple_id,
        form("Banana", &lookups),
    ));
    assert_eq!(status, Some(StatusMessage::failure(DUPLICATE_NAME)));

    let mut renamed = form("Pineapple", &lookups);
    renamed.id = Some(banana_id);
    let status = status_of(products::update_product(&repo, apple_id, renamed));
    assert_eq!(status, Some(StatusMessage::success(UPDATE_SUCCEEDED)));

    let pineapple: Option<Product> = repo.fetch_by_id(apple_id).unwrap();
    assert_eq!(pineapple.map(|p| p.name), Some("Pineapple".to_string()));

    let matches = match products::search_products(
        &repo,
        SearchQuery {
            value: Some("APP".to_string()),
        },
    ) {
        PageOutcome::Render(matches) => matches,
        PageOutcome::Redirect(redirect) => panic!("unexpected redirect: {redirect:?}"),
    };
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, apple_id);

    let json = products::search_summaries(&repo, SearchQuery::default()).unwrap();
    assert_eq!(json.len(), 2);

    assert_eq!(
        products::delete_product(&repo, banana_id),
        IndexRedirect::default()
    );
    let redirect = products::delete_product(&repo, banana_id);
    assert_eq!(
        redirect.message.as_deref(),
        Some(products::DELETE_FAILED)
    );

    let page = products::load_products(&repo, ProductsQuery::default());
    assert_eq!(page.products.len(), 1);
    assert!(page.status.is_none());
}

#[test]
fn create_form_lists_lookup_sets() {
    let test_db = common::TestDb::new("service_create_form_lookups.db");
    let repo = DieselRepository::new(test_db.pool());
    let lookups = common::seed_lookups(&repo);

    let page = match products::show_create_form(&repo) {
        PageOutcome::Render(page) => page,
        PageOutcome::Redirect(redirect) => panic!("unexpected redirect: {redirect:?}"),
    };

    assert_eq!(page.model.categories, vec![lookups.category]);
    assert_eq!(page.model.manufacturers, vec![lookups.manufacturer]);
    assert_eq!(page.model.suppliers, vec![lookups.supplier]);
}
