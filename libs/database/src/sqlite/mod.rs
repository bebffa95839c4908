//! Embedded SQLite store for debug mode and tests
//!
//! In-memory databases live exactly as long as their last connection, so the
//! pool is pinned to a single connection that never idles out.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default};

const PINNED: Duration = Duration::from_secs(60 * 60 * 24 * 365);

pub const DEFAULT_SQLITE_URL: &str = "sqlite:file:todo?mode=memory&cache=shared";

#[derive(Clone, Debug)]
pub struct SqliteConfig {
    pub url: String,
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sqlx_logging: false,
        }
    }

    /// Private in-memory database, one per pool
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let in_memory = self.is_in_memory();
        let mut opt = ConnectOptions::new(self.url);
        opt.connect_timeout(Duration::from_secs(8))
            .sqlx_logging(self.sqlx_logging);

        if in_memory {
            opt.max_connections(1)
                .min_connections(1)
                .idle_timeout(PINNED)
                .max_lifetime(PINNED);
        } else {
            opt.max_connections(8).min_connections(1);
        }
        opt
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SQLITE_URL)
    }
}

/// Reads `SQLITE_URL`, falling back to a shared in-memory database.
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_or_default("SQLITE_URL", DEFAULT_SQLITE_URL)))
    }
}

pub async fn connect(config: SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    let in_memory = config.is_in_memory();
    let db = Database::connect(config.into_connect_options()).await?;
    info!(in_memory, "Connected to SQLite");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    #[test]
    fn test_memory_urls_pin_pool_to_one_connection() {
        let options = SqliteConfig::default().into_connect_options();
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
    }

    #[test]
    fn test_file_urls_allow_a_wider_pool() {
        let config = SqliteConfig::new("sqlite://todo.db?mode=rwc");
        assert!(!config.is_in_memory());
        assert_eq!(config.into_connect_options().get_max_connections(), Some(8));
    }

    #[tokio::test]
    async fn test_in_memory_database_survives_between_statements() {
        let db = connect(SqliteConfig::in_memory()).await.unwrap();

        let sql = |s: &str| Statement::from_string(DatabaseBackend::Sqlite, s.to_owned());
        db.execute_raw(sql("CREATE TABLE notes (id TEXT PRIMARY KEY)")).await.unwrap();
        db.execute_raw(sql("INSERT INTO notes (id) VALUES ('a')")).await.unwrap();

        let row = db
            .query_one_raw(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM notes".to_owned(),
            ))
            .await
            .unwrap()
            .unwrap();
        let n: i64 = row.try_get("", "n").unwrap();
        assert_eq!(n, 1);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_sqlite_config_from_env_default() {
        temp_env::with_var_unset("SQLITE_URL", || {
            let config = SqliteConfig::from_env().unwrap();
            assert_eq!(config.url, DEFAULT_SQLITE_URL);
        });
    }
}
