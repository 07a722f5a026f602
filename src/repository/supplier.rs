use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
    UpdateSupplier as DomainUpdateSupplier,
};
use crate::models::supplier::{
    NewSupplier as DbNewSupplier, Supplier as DbSupplier, UpdateSupplier as DbUpdateSupplier,
};
use crate::repository::{DataReader, DataWriter, DieselRepository, Record};

impl Record for DomainSupplier {
    type New = DomainNewSupplier;
    type Update = DomainUpdateSupplier;
}

impl DataReader<DomainSupplier> for DieselRepository {
    fn fetch_all(&self) -> RepositoryResult<Vec<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let items = suppliers::table
            .order((suppliers::name.asc(), suppliers::id.asc()))
            .load::<DbSupplier>(&mut conn)?;

        Ok(items.into_iter().map(DomainSupplier::from).collect())
    }

    fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSupplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let supplier = suppliers::table
            .filter(suppliers::id.eq(id))
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(DomainSupplier::from))
    }
}

impl DataWriter<DomainSupplier> for DieselRepository {
    fn add(&self, new_supplier: &DomainNewSupplier) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let insertable = DbNewSupplier::from(new_supplier);

        let created = diesel::insert_into(suppliers::table)
            .values(&insertable)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.into())
    }

    fn update(
        &self,
        supplier_id: i32,
        updates: &DomainUpdateSupplier,
    ) -> RepositoryResult<DomainSupplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateSupplier::from(updates);

        let updated = diesel::update(suppliers::table.filter(suppliers::id.eq(supplier_id)))
            .set(&db_updates)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, supplier_id: i32) -> RepositoryResult<()> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(suppliers::table.filter(suppliers::id.eq(supplier_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
