//! Todo Server
//!
//! Serves the todo API over gRPC and, through a JSON gateway, over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! HTTP client ──► gateway (axum) ──┐
//!                                  │ loopback channel
//! gRPC client ─────────────────────┤
//!                                  ▼
//!                 InterceptorChain (auth → tags → telemetry)
//!                                  ▼
//!                 TodoServiceImpl / AuthServiceImpl
//!                                  ▼
//!                 TodoRepository (SqlTodoRepository)
//!                                  ▼
//!                       SQLite (DEBUG) or PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: environment configuration
//! - `server`: bootstrap and listener lifecycle
//! - `service`: `todo.v1.TodoService` handlers
//! - `auth_service`: `auth.v1.AuthService` handlers
//! - `gateway`: HTTP router with CORS and request ids

pub mod auth_service;
pub mod config;
pub mod gateway;
pub mod server;
pub mod service;

pub use auth_service::AuthServiceImpl;
pub use config::Config;
pub use server::{run, serve_grpc};
pub use service::TodoServiceImpl;
