use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::common::{DatabaseError, RetryConfig};
use crate::postgres::{self, PostgresConfig};
use crate::sqlite::{self, SqliteConfig};

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_flag};

/// Which relational backend the process talks to
#[derive(Clone, Debug)]
pub enum StoreConfig {
    Sqlite(SqliteConfig),
    Postgres(PostgresConfig),
}

impl StoreConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
        }
    }
}

/// `DEBUG=true` selects the embedded SQLite store (`SQLITE_URL`),
/// anything else requires `DATABASE_URL`.
#[cfg(feature = "config")]
impl FromEnv for StoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        if env_flag("DEBUG", false)? {
            Ok(Self::Sqlite(SqliteConfig::from_env()?))
        } else {
            Ok(Self::Postgres(PostgresConfig::from_env()?))
        }
    }
}

/// Open a pool for the configured backend.
///
/// Only PostgreSQL is retried; the embedded store either opens or it doesn't.
pub async fn connect_store(
    config: &StoreConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    match config {
        StoreConfig::Sqlite(sqlite) => sqlite::connect(sqlite.clone()).await,
        StoreConfig::Postgres(pg) => postgres::connect_with_retry(pg.clone(), retry_config).await,
    }
}

/// Bring the schema up to date. Safe to run on every start.
pub async fn run_migrations<M: MigratorTrait>(db: &DatabaseConnection, app_name: &str) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations complete");
    Ok(())
}

pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    let backend = db.get_database_backend();
    debug!(?backend, "Running store health check");

    let stmt = Statement::from_string(backend, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    Ok(())
}
