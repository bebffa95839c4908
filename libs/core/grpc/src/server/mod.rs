//! RPC listener helpers
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
//!
//! let (health_reporter, health_service) = create_health_service();
//! GrpcServer::set_serving(&health_reporter, &[TODO_SERVICE, AUTH_SERVICE]).await;
//! GrpcServer::log_startup(&config, &[TODO_SERVICE, AUTH_SERVICE]);
//! ```

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
