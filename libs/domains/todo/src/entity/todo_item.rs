use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{Project, TodoItem};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub owner_id: String,
    pub is_done: bool,
    pub project_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "SetNull"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuild the domain item; `project` is the row `project_id` points at.
    pub fn into_domain(self, project: Option<super::project::Model>) -> TodoItem {
        TodoItem {
            id: self.id,
            title: self.title,
            owner_id: self.owner_id,
            is_done: self.is_done,
            project: project.map(Project::from),
        }
    }
}

/// Insert model for a new item; the project is wired by id only.
impl From<&TodoItem> for ActiveModel {
    fn from(item: &TodoItem) -> Self {
        ActiveModel {
            id: Set(item.id),
            title: Set(item.title.clone()),
            owner_id: Set(item.owner_id.clone()),
            is_done: Set(item.is_done),
            project_id: Set(item.project.as_ref().map(|project| project.id)),
        }
    }
}
