//! Schema CLI for the todo store, e.g. `cargo run -p migration -- up -u $DATABASE_URL`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
