use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(critica_api_migration::Migrator).await;
}
