use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_projects::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoItems::Table)
                    .if_not_exists()
                    .col(pk_uuid(TodoItems::Id))
                    .col(string(TodoItems::Title))
                    .col(string(TodoItems::OwnerId))
                    .col(boolean(TodoItems::IsDone).default(false))
                    .col(uuid_null(TodoItems::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_items_project_id")
                            .from(TodoItems::Table, TodoItems::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todo_items_owner_id")
                    .table(TodoItems::Table)
                    .col(TodoItems::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todo_items_project_id")
                    .table(TodoItems::Table)
                    .col(TodoItems::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TodoItems {
    Table,
    Id,
    Title,
    OwnerId,
    IsDone,
    ProjectId,
}
