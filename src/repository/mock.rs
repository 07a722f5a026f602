use mockall::mock;

use super::{DataReader, DataWriter};
use crate::domain::{
    category::Category,
    manufacturer::Manufacturer,
    product::{NewProduct, Product, UpdateProduct},
    supplier::Supplier,
};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub ProductStore {}

    impl DataReader<Product> for ProductStore {
        fn fetch_all(&self) -> RepositoryResult<Vec<Product>>;
        fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    }

    impl DataWriter<Product> for ProductStore {
        fn add(&self, product: &NewProduct) -> RepositoryResult<Product>;
        fn update(&self, id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete(&self, id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CategoryReader {}

    impl DataReader<Category> for CategoryReader {
        fn fetch_all(&self) -> RepositoryResult<Vec<Category>>;
        fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    }
}

mock! {
    pub ManufacturerReader {}

    impl DataReader<Manufacturer> for ManufacturerReader {
        fn fetch_all(&self) -> RepositoryResult<Vec<Manufacturer>>;
        fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<Manufacturer>>;
    }
}

mock! {
    pub SupplierReader {}

    impl DataReader<Supplier> for SupplierReader {
        fn fetch_all(&self) -> RepositoryResult<Vec<Supplier>>;
        fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
    }
}
