use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::{DataReader, DataWriter, DieselRepository, Record};

impl Record for DomainProduct {
    type New = DomainNewProduct;
    type Update = DomainUpdateProduct;
}

impl DataReader<DomainProduct> for DieselRepository {
    fn fetch_all(&self) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order((products::name.asc(), products::id.asc()))
            .load::<DbProduct>(&mut conn)?;

        Ok(items.into_iter().map(DomainProduct::from).collect())
    }

    fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(DomainProduct::from))
    }
}

impl DataWriter<DomainProduct> for DieselRepository {
    fn add(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let target = products::table.filter(products::id.eq(product_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
