//! Rating data models and DTOs.
//!
//! Re-exports the shared models and adds the service-level types that never
//! leave the server.

pub use profrate_models::ratings::*;

/// Rating input after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRating {
    pub year: i64,
    pub semester: i64,
    pub rating: i64,
}

/// Outcome of a professor/module average lookup where both codes exist.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleAverage {
    Rated(ProfessorModuleAverage),
    NoRatings(NoRatingsResponse),
}
