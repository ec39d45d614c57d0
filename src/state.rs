use profrate_config::{CorsConfig, RatingConfig};
use sqlx::SqlitePool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub rating_config: RatingConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn from_env(db: SqlitePool) -> Self {
        Self {
            db,
            rating_config: RatingConfig::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}
