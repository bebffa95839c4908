//! Server infrastructure module.
//!
//! This module provides:
//! - Listener setup for an axum router
//! - Graceful shutdown coordination shared by every listener of a process
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{ShutdownCoordinator, create_app};
//!
//! let (coordinator, _rx) = ShutdownCoordinator::new();
//! let signals = coordinator.clone();
//! tokio::spawn(async move { signals.wait_for_signal().await });
//!
//! create_app(router, &ServerConfig::default(), coordinator).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{create_app, serve};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
