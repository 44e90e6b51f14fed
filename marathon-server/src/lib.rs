//! marathon-server: REST backend for the Marathon learning app
//!
//! Students, lessons, topics, exam simulations, daily statistics,
//! achievements and chatbot interactions over PostgreSQL, served with axum.

pub mod auth;
pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::create_pool;
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
