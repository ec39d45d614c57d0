//! # Profrate DB
//!
//! SQLite connection pool initialization and embedded schema migrations.
//!
//! # Example
//!
//! ```ignore
//! use profrate_config::DatabaseConfig;
//! use profrate_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

use std::str::FromStr;
use std::time::Duration;

use profrate_config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a connection pool for the configured SQLite database, creating the
/// file if it does not exist. Foreign keys are enforced on every connection
/// so the cascading deletes in the schema take effect.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    info!(db.url = %config.url, db.max_connections = config.max_connections, "Database pool ready");

    Ok(pool)
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_runs_migrations() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            busy_timeout_secs: 1,
        };
        let pool = init_db_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        for table in [
            "auth_tokens",
            "module_instance_professors",
            "module_instances",
            "modules",
            "professors",
            "ratings",
            "users",
        ] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }
    }
}
