//! Subcommand implementations

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use marathon_server::DbConfig;

/// Database settings from the environment, with an optional URL override.
fn db_config(database_url: Option<String>) -> Result<DbConfig> {
    let config = DbConfig::from_env().context("Invalid database settings in environment")?;
    Ok(config.with_url(database_url))
}
