//! Database connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string (default `sqlite://profrate.db`)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)
//! - `DATABASE_BUSY_TIMEOUT`: seconds to wait on a locked database (default 5)

use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://profrate.db".to_string()),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5),
            busy_timeout_secs: env_or("DATABASE_BUSY_TIMEOUT", 5),
        }
    }
}
