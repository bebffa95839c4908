pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_projects;
mod m20250301_000002_create_todo_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_projects::Migration),
            Box::new(m20250301_000002_create_todo_items::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn test_migrations_apply_and_revert_on_sqlite() {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        let db = Database::connect(options).await.unwrap();
        let manager = SchemaManager::new(&db);

        Migrator::up(&db, None).await.unwrap();
        assert!(manager.has_table("projects").await.unwrap());
        assert!(manager.has_table("todo_items").await.unwrap());
        assert!(manager.has_column("todo_items", "project_id").await.unwrap());

        Migrator::down(&db, None).await.unwrap();
        assert!(!manager.has_table("todo_items").await.unwrap());
        assert!(!manager.has_table("projects").await.unwrap());
    }
}
