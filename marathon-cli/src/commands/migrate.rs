//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;

use marathon_server::db::{create_pool, migrations};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides DB_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create all tables, then exit.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db = super::db_config(args.database_url)?;

    let pool = create_pool(&db)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create database schema")?;

    tracing::info!("Schema is up to date");
    pool.close().await;
    Ok(())
}
