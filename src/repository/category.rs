use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::repository::{DataReader, DataWriter, DieselRepository, Record};

impl Record for DomainCategory {
    type New = DomainNewCategory;
    type Update = DomainUpdateCategory;
}

impl DataReader<DomainCategory> for DieselRepository {
    fn fetch_all(&self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order((categories::name.asc(), categories::id.asc()))
            .load::<DbCategory>(&mut conn)?;

        Ok(items.into_iter().map(DomainCategory::from).collect())
    }

    fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }
}

impl DataWriter<DomainCategory> for DieselRepository {
    fn add(&self, new_category: &DomainNewCategory) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(categories::table.filter(categories::id.eq(category_id)))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(categories::table.filter(categories::id.eq(category_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
