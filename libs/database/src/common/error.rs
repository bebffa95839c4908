/// Errors raised while connecting to or preparing the store
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error reported by SeaORM / the driver
    #[error("Database error: {0}")]
    Driver(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for store operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
