//! SeaORM entities for the `projects` and `todo_items` tables

pub mod project;
pub mod todo_item;
