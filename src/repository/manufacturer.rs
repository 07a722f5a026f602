use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::manufacturer::{
    Manufacturer as DomainManufacturer, NewManufacturer as DomainNewManufacturer,
    UpdateManufacturer as DomainUpdateManufacturer,
};
use crate::models::manufacturer::{
    Manufacturer as DbManufacturer, NewManufacturer as DbNewManufacturer,
    UpdateManufacturer as DbUpdateManufacturer,
};
use crate::repository::{DataReader, DataWriter, DieselRepository, Record};

impl Record for DomainManufacturer {
    type New = DomainNewManufacturer;
    type Update = DomainUpdateManufacturer;
}

impl DataReader<DomainManufacturer> for DieselRepository {
    fn fetch_all(&self) -> RepositoryResult<Vec<DomainManufacturer>> {
        use crate::schema::manufacturers;

        let mut conn = self.conn()?;

        let items = manufacturers::table
            .order((manufacturers::name.asc(), manufacturers::id.asc()))
            .load::<DbManufacturer>(&mut conn)?;

        Ok(items.into_iter().map(DomainManufacturer::from).collect())
    }

    fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<DomainManufacturer>> {
        use crate::schema::manufacturers;

        let mut conn = self.conn()?;

        let manufacturer = manufacturers::table
            .filter(manufacturers::id.eq(id))
            .first::<DbManufacturer>(&mut conn)
            .optional()?;

        Ok(manufacturer.map(DomainManufacturer::from))
    }
}

impl DataWriter<DomainManufacturer> for DieselRepository {
    fn add(
        &self,
        new_manufacturer: &DomainNewManufacturer,
    ) -> RepositoryResult<DomainManufacturer> {
        use crate::schema::manufacturers;

        let mut conn = self.conn()?;
        let insertable = DbNewManufacturer::from(new_manufacturer);

        let created = diesel::insert_into(manufacturers::table)
            .values(&insertable)
            .get_result::<DbManufacturer>(&mut conn)?;

        Ok(created.into())
    }

    fn update(
        &self,
        manufacturer_id: i32,
        updates: &DomainUpdateManufacturer,
    ) -> RepositoryResult<DomainManufacturer> {
        use crate::schema::manufacturers;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateManufacturer::from(updates);

        let updated =
            diesel::update(manufacturers::table.filter(manufacturers::id.eq(manufacturer_id)))
                .set(&db_updates)
                .get_result::<DbManufacturer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, manufacturer_id: i32) -> RepositoryResult<()> {
        use crate::schema::manufacturers;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(manufacturers::table.filter(manufacturers::id.eq(manufacturer_id)))
                .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
