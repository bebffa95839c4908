use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TodoResult;
use crate::models::{Project, ProjectInfo, TodoItem, TodoItemQuery};

/// Persistence port for todo items and projects
///
/// Every "not found" surfaces as [`TodoError::NotFound`](crate::TodoError::NotFound),
/// whatever the backend. Dropping a returned future cancels the storage call.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Store a new item. A project reference must name an existing project
    /// and is wired by id; duplicate ids fail with `AlreadyExists`.
    async fn create_item(&self, item: TodoItem) -> TodoResult<TodoItem>;

    /// Item with its project (id/name/owner) loaded
    async fn get_item_by_id(&self, id: Uuid) -> TodoResult<TodoItem>;

    /// Every not-done item of `owner_id`, in no particular order
    async fn all_undone_items(&self, owner_id: &str) -> TodoResult<Vec<TodoItem>>;

    async fn get_items(&self, query: TodoItemQuery) -> TodoResult<Vec<TodoItem>>;

    /// Writes `title` and `is_done` only. Owner and project are kept.
    async fn update_item(&self, id: Uuid, updated: TodoItem) -> TodoResult<TodoItem>;

    /// Not idempotent: a second delete fails with `NotFound`
    async fn delete_item(&self, id: Uuid) -> TodoResult<()>;

    async fn create_project(&self, project: Project) -> TodoResult<Project>;

    async fn get_all_member_projects(&self, owner_id: &str) -> TodoResult<Vec<Project>>;

    async fn get_project(&self, id: Uuid) -> TodoResult<ProjectInfo>;

    /// Items of the project are detached (project set to none), not deleted
    async fn delete_project(&self, id: Uuid) -> TodoResult<()>;

    async fn update_project_by_id(&self, id: Uuid, name: String) -> TodoResult<Project>;
}
