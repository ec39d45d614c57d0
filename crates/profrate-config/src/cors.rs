//! Browser origins allowed to call the API.
//!
//! `ALLOWED_ORIGINS` is a comma-separated list; `*` allows any origin.

use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:8000,http://127.0.0.1:8000";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Self {
        let mut allowed_origins: Vec<String> = Vec::new();
        for origin in raw.split(',').map(|s| s.trim().trim_end_matches('/')) {
            if !origin.is_empty() && !allowed_origins.iter().any(|o| o == origin) {
                allowed_origins.push(origin.to_string());
            }
        }
        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
