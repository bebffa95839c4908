//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestDatabase`: migrated in-memory SQLite database (always available)
//! - `PostgresTestDatabase`: PostgreSQL container with automatic cleanup (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_repository_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_repository_test");
//!
//!     let owner = builder.owner_id("alice");
//!     let project_id = builder.uuid(1);
//! }
//! ```

use uuid::Uuid;

mod sqlite;

#[cfg(feature = "postgres")]
mod postgres;

pub use sqlite::TestDatabase;

#[cfg(feature = "postgres")]
pub use postgres::PostgresTestDatabase;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving everything from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic UUID for the `n`-th entity of a test
    pub fn uuid(&self, n: u64) -> Uuid {
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        uuid_bytes[8..16].copy_from_slice(&n.to_le_bytes());
        Uuid::from_bytes(uuid_bytes)
    }

    /// Owner identifier scoped to this test
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.owner_id("alice"), "user-7-alice");
    /// ```
    pub fn owner_id(&self, who: &str) -> String {
        format!("user-{}-{}", self.seed, who)
    }

    /// Generate a unique name for testing
    ///
    /// * `prefix` - The type of resource (e.g., "project", "item")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    use uuid::Uuid;

    /// Assert that two UUIDs are equal with a nice error message
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two collections hold the same ids, ignoring order
    pub fn assert_same_ids(actual: impl IntoIterator<Item = Uuid>, expected: &[Uuid]) {
        let mut actual: Vec<Uuid> = actual.into_iter().collect();
        let mut expected = expected.to_vec();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected, "id sets differ");
    }
}
