//! Migration CLI tool.
//!
//! The sea-orm-migration CLI installs its own tracing subscriber.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(migration::Migrator).await;
}
