//! SeaORM adapter for [`TodoRepository`]
//!
//! Works against any backend the `database` crate connects to. Multi-statement
//! operations run in one transaction; nothing is locked at application level.

use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entity::{project, todo_item};
use crate::error::{TodoError, TodoResult};
use crate::models::{DoneFilter, Project, ProjectInfo, TodoItem, TodoItemQuery};
use crate::repository::TodoRepository;

#[derive(Clone)]
pub struct SqlTodoRepository {
    db: DatabaseConnection,
}

impl SqlTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn select_items(&self, query: TodoItemQuery) -> TodoResult<Vec<TodoItem>> {
        let mut select = todo_item::Entity::find();

        if let Some(id) = query.id {
            select = select.filter(todo_item::Column::Id.eq(id));
        }
        if let Some(owner_id) = query.owner_id {
            select = select.filter(todo_item::Column::OwnerId.eq(owner_id));
        }
        if let Some(title) = query.title {
            select = select.filter(todo_item::Column::Title.eq(title));
        }
        if let Some(is_done) = query.done.as_flag() {
            select = select.filter(todo_item::Column::IsDone.eq(is_done));
        }
        if !query.project_ids.is_empty() {
            select = select.filter(todo_item::Column::ProjectId.is_in(query.project_ids));
        }

        let rows = select
            .find_also_related(project::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(item, project)| item.into_domain(project))
            .collect())
    }
}

#[async_trait]
impl TodoRepository for SqlTodoRepository {
    async fn create_item(&self, item: TodoItem) -> TodoResult<TodoItem> {
        let txn = self.db.begin().await?;

        if todo_item::Entity::find_by_id(item.id)
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(TodoError::item_exists(item.id));
        }

        let project = match &item.project {
            Some(reference) => Some(
                project::Entity::find_by_id(reference.id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| TodoError::project_not_found(reference.id))?,
            ),
            None => None,
        };

        let model = todo_item::ActiveModel::from(&item).insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = %model.id, project_id = ?model.project_id, "Created todo item");
        Ok(model.into_domain(project))
    }

    async fn get_item_by_id(&self, id: Uuid) -> TodoResult<TodoItem> {
        let (item, project) = todo_item::Entity::find_by_id(id)
            .find_also_related(project::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| TodoError::item_not_found(id))?;

        Ok(item.into_domain(project))
    }

    async fn all_undone_items(&self, owner_id: &str) -> TodoResult<Vec<TodoItem>> {
        self.select_items(TodoItemQuery {
            done: DoneFilter::NotDone,
            ..TodoItemQuery::for_owner(owner_id)
        })
        .await
    }

    async fn get_items(&self, query: TodoItemQuery) -> TodoResult<Vec<TodoItem>> {
        self.select_items(query).await
    }

    async fn update_item(&self, id: Uuid, updated: TodoItem) -> TodoResult<TodoItem> {
        let (item, project) = todo_item::Entity::find_by_id(id)
            .find_also_related(project::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| TodoError::item_not_found(id))?;

        let mut active: todo_item::ActiveModel = item.into();
        active.title = Set(updated.title);
        active.is_done = Set(updated.is_done);
        let model = active.update(&self.db).await?;

        tracing::info!(item_id = %id, is_done = model.is_done, "Updated todo item");
        Ok(model.into_domain(project))
    }

    async fn delete_item(&self, id: Uuid) -> TodoResult<()> {
        let result = todo_item::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(TodoError::item_not_found(id));
        }

        tracing::info!(item_id = %id, "Deleted todo item");
        Ok(())
    }

    async fn create_project(&self, project: Project) -> TodoResult<Project> {
        let txn = self.db.begin().await?;

        if project::Entity::find_by_id(project.id)
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(TodoError::project_exists(project.id));
        }

        let model = project::ActiveModel {
            id: Set(project.id),
            name: Set(project.name),
            owner_id: Set(project.owner_id),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        tracing::info!(project_id = %model.id, "Created project");
        Ok(model.into())
    }

    async fn get_all_member_projects(&self, owner_id: &str) -> TodoResult<Vec<Project>> {
        let models = project::Entity::find()
            .filter(project::Column::OwnerId.eq(owner_id))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn get_project(&self, id: Uuid) -> TodoResult<ProjectInfo> {
        let model = project::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| TodoError::project_not_found(id))?;

        let items = model.find_related(todo_item::Entity).all(&self.db).await?;

        let items = items
            .into_iter()
            .map(|item| item.into_domain(Some(model.clone())))
            .collect();

        Ok(ProjectInfo {
            project: model.into(),
            items,
        })
    }

    async fn delete_project(&self, id: Uuid) -> TodoResult<()> {
        let txn = self.db.begin().await?;

        let detached = todo_item::Entity::update_many()
            .set(todo_item::ActiveModel {
                project_id: Set(None),
                ..Default::default()
            })
            .filter(todo_item::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;

        let result = project::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            // Dropping the transaction rolls back the detach
            return Err(TodoError::project_not_found(id));
        }
        txn.commit().await?;

        tracing::info!(project_id = %id, detached, "Deleted project");
        Ok(())
    }

    async fn update_project_by_id(&self, id: Uuid, name: String) -> TodoResult<Project> {
        let model = project::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| TodoError::project_not_found(id))?;

        let mut active: project::ActiveModel = model.into();
        active.name = Set(name);
        let model = active.update(&self.db).await?;

        tracing::info!(project_id = %id, "Renamed project");
        Ok(model.into())
    }
}
