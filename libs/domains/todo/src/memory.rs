//! In-process adapter for [`TodoRepository`], used by tests and demos
//!
//! Mirrors the relational adapter: items store a project id and the project
//! is resolved on every read.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TodoError, TodoResult};
use crate::models::{DoneFilter, Project, ProjectInfo, TodoItem, TodoItemQuery};
use crate::repository::TodoRepository;

#[derive(Debug, Clone)]
struct StoredItem {
    title: String,
    owner_id: String,
    is_done: bool,
    project_id: Option<Uuid>,
}

#[derive(Debug, Default)]
struct Store {
    items: HashMap<Uuid, StoredItem>,
    projects: HashMap<Uuid, Project>,
}

impl Store {
    fn materialize(&self, id: Uuid, stored: &StoredItem) -> TodoItem {
        TodoItem {
            id,
            title: stored.title.clone(),
            owner_id: stored.owner_id.clone(),
            is_done: stored.is_done,
            project: stored
                .project_id
                .and_then(|project_id| self.projects.get(&project_id).cloned()),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create_item(&self, item: TodoItem) -> TodoResult<TodoItem> {
        let mut store = self.store.write().await;

        if store.items.contains_key(&item.id) {
            return Err(TodoError::item_exists(item.id));
        }
        let project_id = match &item.project {
            Some(reference) if !store.projects.contains_key(&reference.id) => {
                return Err(TodoError::project_not_found(reference.id));
            }
            Some(reference) => Some(reference.id),
            None => None,
        };

        let stored = StoredItem {
            title: item.title,
            owner_id: item.owner_id,
            is_done: item.is_done,
            project_id,
        };
        let created = store.materialize(item.id, &stored);
        store.items.insert(item.id, stored);
        Ok(created)
    }

    async fn get_item_by_id(&self, id: Uuid) -> TodoResult<TodoItem> {
        let store = self.store.read().await;
        store
            .items
            .get(&id)
            .map(|stored| store.materialize(id, stored))
            .ok_or_else(|| TodoError::item_not_found(id))
    }

    async fn all_undone_items(&self, owner_id: &str) -> TodoResult<Vec<TodoItem>> {
        self.get_items(TodoItemQuery {
            done: DoneFilter::NotDone,
            ..TodoItemQuery::for_owner(owner_id)
        })
        .await
    }

    async fn get_items(&self, query: TodoItemQuery) -> TodoResult<Vec<TodoItem>> {
        let store = self.store.read().await;
        Ok(store
            .items
            .iter()
            .map(|(id, stored)| store.materialize(*id, stored))
            .filter(|item| query.matches(item))
            .collect())
    }

    async fn update_item(&self, id: Uuid, updated: TodoItem) -> TodoResult<TodoItem> {
        let mut store = self.store.write().await;
        let stored = store
            .items
            .get_mut(&id)
            .ok_or_else(|| TodoError::item_not_found(id))?;

        stored.title = updated.title;
        stored.is_done = updated.is_done;
        let stored = stored.clone();
        Ok(store.materialize(id, &stored))
    }

    async fn delete_item(&self, id: Uuid) -> TodoResult<()> {
        self.store
            .write()
            .await
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| TodoError::item_not_found(id))
    }

    async fn create_project(&self, project: Project) -> TodoResult<Project> {
        let mut store = self.store.write().await;
        if store.projects.contains_key(&project.id) {
            return Err(TodoError::project_exists(project.id));
        }
        store.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn get_all_member_projects(&self, owner_id: &str) -> TodoResult<Vec<Project>> {
        let store = self.store.read().await;
        Ok(store
            .projects
            .values()
            .filter(|project| project.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn get_project(&self, id: Uuid) -> TodoResult<ProjectInfo> {
        let store = self.store.read().await;
        let project = store
            .projects
            .get(&id)
            .cloned()
            .ok_or_else(|| TodoError::project_not_found(id))?;

        let items = store
            .items
            .iter()
            .filter(|(_, stored)| stored.project_id == Some(id))
            .map(|(item_id, stored)| store.materialize(*item_id, stored))
            .collect();

        Ok(ProjectInfo { project, items })
    }

    async fn delete_project(&self, id: Uuid) -> TodoResult<()> {
        let mut store = self.store.write().await;
        if store.projects.remove(&id).is_none() {
            return Err(TodoError::project_not_found(id));
        }
        for stored in store.items.values_mut() {
            if stored.project_id == Some(id) {
                stored.project_id = None;
            }
        }
        Ok(())
    }

    async fn update_project_by_id(&self, id: Uuid, name: String) -> TodoResult<Project> {
        let mut store = self.store.write().await;
        let project = store
            .projects
            .get_mut(&id)
            .ok_or_else(|| TodoError::project_not_found(id))?;
        project.name = name;
        Ok(project.clone())
    }
}
