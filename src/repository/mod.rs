use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

pub mod category;
pub mod manufacturer;
pub mod product;
pub mod supplier;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Associates a stored entity with the payloads used to create and modify it.
pub trait Record {
    /// Payload accepted by [`DataWriter::add`].
    type New;
    /// Payload accepted by [`DataWriter::update`].
    type Update;
}

/// Read-only operations over a collection of records of type `T`.
pub trait DataReader<T> {
    fn fetch_all(&self) -> RepositoryResult<Vec<T>>;
    fn fetch_by_id(&self, id: i32) -> RepositoryResult<Option<T>>;
}

/// Write operations over a collection of records of type `T`.
///
/// `update` and `delete` report [`RepositoryError::NotFound`] when no row
/// matches `id`.
///
/// [`RepositoryError::NotFound`]: pushkind_common::repository::errors::RepositoryError::NotFound
pub trait DataWriter<T: Record> {
    fn add(&self, new: &T::New) -> RepositoryResult<T>;
    fn update(&self, id: i32, updates: &T::Update) -> RepositoryResult<T>;
    fn delete(&self, id: i32) -> RepositoryResult<()>;
}
