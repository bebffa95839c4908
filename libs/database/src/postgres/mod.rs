//! PostgreSQL connector used outside debug mode

mod config;
mod connector;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, connect_with_options, connect_with_retry};
