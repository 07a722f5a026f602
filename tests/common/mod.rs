//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use pushkind_common::db::{DbPool, establish_connection_pool};
use product_catalog::domain::{
    category::{Category, NewCategory},
    manufacturer::{Manufacturer, NewManufacturer},
    supplier::{NewSupplier, Supplier},
};
use product_catalog::repository::{DataWriter, DieselRepository};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    path: String,
    // Declared last so the pool closes its connections before the directory goes.
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename).to_string_lossy().into_owned();

        let pool =
            establish_connection_pool(&path).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Lookup records every product needs.
pub struct Lookups {
    pub category: Category,
    pub manufacturer: Manufacturer,
    pub supplier: Supplier,
}

pub fn seed_lookups(repo: &DieselRepository) -> Lookups {
    let category = DataWriter::<Category>::add(repo, &NewCategory::new("Beverages"))
        .expect("create category");
    let manufacturer = DataWriter::<Manufacturer>::add(repo, &NewManufacturer::new("Acme"))
        .expect("create manufacturer");
    let supplier = DataWriter::<Supplier>::add(repo, &NewSupplier::new("Wholesale Ltd"))
        .expect("create supplier");

    Lookups {
        category,
        manufacturer,
        supplier,
    }
}
