//! Database connection settings from the environment
//!
//! Environment variables:
//!   DATABASE_URL         # full connection string, wins over the parts below
//!   DB_USER              # default: postgres
//!   DB_PASSWORD          # default: postgres
//!   DB_HOST              # default: localhost
//!   DB_PORT              # default: 5432
//!   DB_NAME              # default: marathon
//!   DB_MAX_CONNECTIONS   # default: 10

use sqlx::postgres::PgConnectOptions;

/// Default maximum connections for the pool
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },

    #[error("invalid database URL: {0}")]
    Url(#[source] sqlx::Error),
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Overrides the individual parts when set
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            database: "marathon".to_string(),
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DbConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("DB_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "DB_PORT",
                value,
            })?,
            None => defaults.port,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "DB_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => defaults.max_connections,
        };

        Ok(Self {
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            database: lookup("DB_NAME").unwrap_or(defaults.database),
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            max_connections,
        })
    }

    /// Override the connection string (e.g. from a CLI flag).
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.url = url;
        }
        self
    }

    /// Build sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.url {
            Some(url) => url.parse().map_err(ConfigError::Url),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)),
        }
    }
}
