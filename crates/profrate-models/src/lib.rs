//! # Profrate Models
//!
//! Domain models and DTOs shared by the server, the administration tool and
//! the command-line client.
//!
//! # Modules
//!
//! - [`auth`]: Users, registration, login and token responses
//! - [`catalog`]: Professors, modules and module instances
//! - [`ratings`]: Rating submission and aggregate views
//!
//! # Example
//!
//! ```ignore
//! use profrate_models::catalog::{ModuleInstanceListing, ProfessorInfo};
//! use profrate_models::ratings::ProfessorModuleAverage;
//! ```

pub mod auth;
pub mod catalog;
pub mod ratings;

// Re-export commonly used types at crate root for convenience
pub use auth::{ErrorResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, User};

pub use catalog::{
    CreateModuleDto, CreateModuleInstanceDto, CreateProfessorDto, Module, ModuleInstance,
    ModuleInstanceListing, Professor, ProfessorInfo,
};

pub use ratings::{
    AverageNotFoundResponse, NoRatingsResponse, ProfessorModuleAverage, ProfessorRating,
    RateProfessorRequest,
};
