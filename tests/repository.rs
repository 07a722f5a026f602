use pushkind_common::repository::errors::RepositoryError;
use product_catalog::domain::category::{Category, NewCategory, UpdateCategory};
use product_catalog::domain::product::{NewProduct, Product, UpdateProduct};
use product_catalog::repository::{DataReader, DataWriter, DieselRepository};

mod common;

#[test]
fn test_product_repository_crud() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());
    let lookups = common::seed_lookups(&repo);

    let new_product = |name: &str| {
        NewProduct::new(
            name,
            lookups.category.id,
            lookups.manufacturer.id,
            lookups.supplier.id,
        )
    };

    let banana = DataWriter::<Product>::add(&repo, &new_product("Banana")).unwrap();
    let apple = DataWriter::<Product>::add(
        &repo,
        &new_product("Apple").with_description("Red and crisp"),
    )
    .unwrap();
    assert_eq!(apple.description.as_deref(), Some("Red and crisp"));

    let items: Vec<Product> = repo.fetch_all().unwrap();
    let names: Vec<&str> = items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Banana"]);

    let updated = DataWriter::<Product>::update(
        &repo,
        apple.id,
        &UpdateProduct::new(
            "Green Apple",
            None,
            lookups.category.id,
            lookups.manufacturer.id,
            lookups.supplier.id,
        ),
    )
    .unwrap();
    assert_eq!(updated.id, apple.id);
    assert_eq!(updated.name, "Green Apple");
    assert!(updated.description.is_none());

    let err = DataWriter::<Product>::update(
        &repo,
        apple.id + banana.id + 100,
        &UpdateProduct::new(
            "Ghost",
            None,
            lookups.category.id,
            lookups.manufacturer.id,
            lookups.supplier.id,
        ),
    )
    .expect_err("expected update of a missing product to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    DataWriter::<Product>::delete(&repo, banana.id).unwrap();
    let missing: Option<Product> = repo.fetch_by_id(banana.id).unwrap();
    assert!(missing.is_none());

    let err = DataWriter::<Product>::delete(&repo, banana.id)
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    let remaining: Vec<Product> = repo.fetch_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Green Apple");
}

#[test]
fn test_lookup_repository_crud() {
    let test_db = common::TestDb::new("test_lookup_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let snacks = DataWriter::<Category>::add(&repo, &NewCategory::new("Snacks")).unwrap();
    DataWriter::<Category>::add(&repo, &NewCategory::new("Dairy")).unwrap();

    let categories: Vec<Category> = repo.fetch_all().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Dairy");

    let renamed =
        DataWriter::<Category>::update(&repo, snacks.id, &UpdateCategory::new("Sweets")).unwrap();
    assert_eq!(renamed.name, "Sweets");

    let fetched: Option<Category> = repo.fetch_by_id(snacks.id).unwrap();
    assert_eq!(fetched.map(|c| c.name), Some("Sweets".to_string()));

    DataWriter::<Category>::delete(&repo, snacks.id).unwrap();
    let err = DataWriter::<Category>::delete(&repo, snacks.id)
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}
