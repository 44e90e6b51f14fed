//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One pool built at startup and passed in; no global session factory
//! - One statement per repository call
//! - Rely on DB constraints (unique, foreign keys) instead of check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, PoolError};
pub use repos::*;
