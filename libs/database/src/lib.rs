//! Relational store connectors for the todo services.
//!
//! Two interchangeable SeaORM backends are supported:
//!
//! - **sqlite**: embedded, used for local development (`DEBUG=true`) and tests
//! - **postgres**: everything else
//!
//! Both hand out a plain [`sea_orm::DatabaseConnection`], so repositories never
//! know which backend they talk to.
//!
//! # Example
//!
//! ```ignore
//! use database::{StoreConfig, connect_store, run_migrations};
//! use core_config::FromEnv;
//! use migration::Migrator;
//!
//! let store = StoreConfig::from_env()?;
//! let db = connect_store(&store, None).await?;
//! run_migrations::<Migrator>(&db, "todo").await?;
//! ```

pub mod common;
pub mod postgres;
pub mod sqlite;
mod store;

pub use common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};
pub use store::{StoreConfig, check_health, connect_store, run_migrations};

// Re-export SeaORM types for convenience
pub use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
