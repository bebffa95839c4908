//! Todo Domain
//!
//! Todo items, projects and the persistence port they are stored through.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ RPC handlers     │  ← apps/todo, call the port
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ TodoRepository   │  ← port (trait)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ SqlTodoRepository│  ← SeaORM adapter (sqlite / postgres)
//! └──────────────────┘
//! ```
//!
//! The [`handlers`] module is the HTTP/JSON gateway in front of the RPC
//! services; it only talks to them over a channel.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todo::{SqlTodoRepository, TodoRepository};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite::memory:").await?;
//! let repository = SqlTodoRepository::new(db);
//! let projects = repository.get_all_member_projects("user1").await?;
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod sql;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use handlers::{ApiDoc, GatewayState};
pub use memory::InMemoryTodoRepository;
pub use models::{DoneFilter, Project, ProjectInfo, TodoItem, TodoItemQuery};
pub use repository::TodoRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockTodoRepository;
pub use sql::SqlTodoRepository;
