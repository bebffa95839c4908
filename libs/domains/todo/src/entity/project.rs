use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub owner_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::todo_item::Entity")]
    TodoItems,
}

impl Related<super::todo_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TodoItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Project {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            owner_id: model.owner_id,
        }
    }
}
