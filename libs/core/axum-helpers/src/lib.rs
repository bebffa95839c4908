//! # Axum Helpers
//!
//! Shared building blocks for the HTTP side of the services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`http`]**: CORS allow-list layer
//! - **[`server`]**: Listener setup and graceful shutdown coordination
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{ShutdownCoordinator, create_app, create_cors_layer};
//! use core_config::server::ServerConfig;
//!
//! let (shutdown, _) = ShutdownCoordinator::new();
//! let router = Router::new().layer(create_cors_layer(&["*".to_string()])?);
//! create_app(router, &ServerConfig::default(), shutdown).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{ShutdownCoordinator, create_app, shutdown_signal};

// Re-export HTTP middleware
pub use http::{CorsError, create_cors_layer};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};
