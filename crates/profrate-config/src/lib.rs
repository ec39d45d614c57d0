//! # Profrate Config
//!
//! Configuration types for the professor rating service, loaded from
//! environment variables with development defaults:
//!
//! - [`server`]: Listen address
//! - [`database`]: SQLite connection settings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rating`]: Accepted year range for ratings and module instances
//!
//! # Example
//!
//! ```ignore
//! use profrate_config::{DatabaseConfig, RatingConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let database = DatabaseConfig::from_env();
//! let rating = RatingConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod rating;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use rating::RatingConfig;
pub use server::ServerConfig;

/// Reads and parses an environment variable, falling back to `default` when
/// it is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
