//! Database connection pool management
//!
//! One `PgPool` per process. Each repository call checks a connection out
//! for a single statement and returns it when the statement completes.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{ConfigError, DbConfig};

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Create a PostgreSQL connection pool from settings.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the first connection
/// fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, PoolError> {
    let options = config.connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        host = %config.host,
        database = %config.database,
        max_connections = config.max_connections,
        from_url = config.url.is_some(),
        "database pool ready"
    );
    Ok(pool)
}
