//! Catalog data models and DTOs.
//!
//! Re-exported from the `profrate-models` crate.

pub use profrate_models::catalog::*;
