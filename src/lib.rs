//! # Profrate
//!
//! A small REST service, built with Rust, Axum and SQLite, where students
//! rate the professors who teach their modules.
//!
//! ## Overview
//!
//! - **Accounts**: register with username, password and email; log in to
//!   receive an opaque token; log out to revoke it
//! - **Catalog**: modules, professors and the module instances (a module in
//!   a given year and semester) each professor teaches
//! - **Ratings**: authenticated users rate a professor 1-5 for a module
//!   instance; anyone can read overall and per-module averages
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Administration helpers (seeding)
//! ├── middleware/       # Token authentication extractor
//! ├── modules/          # Feature modules
//! │   ├── home/        # Service overview
//! │   ├── auth/        # Register, login, logout
//! │   ├── catalog/     # Professors, modules, module instances
//! │   └── ratings/     # Rating submission and averages
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Tracing setup and request logging
//! ├── router.rs         # Route table
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module has a `controller.rs` (HTTP handlers), a `service.rs`
//! (queries and business rules), a `model.rs` (re-exported DTOs) and a
//! `router.rs`.
//!
//! ## Authentication
//!
//! Tokens are random 40-character hex strings stored in `auth_tokens`, one
//! per user. Clients send them as `Authorization: Token <key>` or
//! `Authorization: Bearer <key>`. Tokens do not expire; logging out deletes
//! the token.
//!
//! ## Environment Variables
//!
//! ```bash
//! DATABASE_URL=sqlite://profrate.db
//! HOST=0.0.0.0
//! PORT=8000
//! RATING_MIN_YEAR=2000
//! RATING_MAX_YEAR=2025
//! ```
//!
//! ## API Documentation
//!
//! When the server is running, API documentation is available at
//! `http://localhost:8000/scalar`.

pub mod cli;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use profrate_config;
pub use profrate_core;
pub use profrate_db;
pub use profrate_models;
