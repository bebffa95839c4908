//! Embedded SQLite test infrastructure
//!
//! Every `TestDatabase` owns a private in-memory database, so tests can run
//! in parallel without sharing rows.

use database::{DatabaseConnection, MigratorTrait, sqlite::SqliteConfig};
use migration::Migrator;

/// Migrated in-memory SQLite database
///
/// The database disappears when the last clone of the connection is dropped.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a fresh in-memory database with all migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection = database::sqlite::connect(SqliteConfig::in_memory())
            .await
            .expect("Failed to open in-memory SQLite database");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations on SQLite");

        tracing::debug!("Test database ready (SQLite, in-memory)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
