//! # Profrate Core
//!
//! Core types, errors, and utilities shared by the professor rating service.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification
//! - [`token`]: Opaque authentication token generation
//! - [`serde`]: Lenient deserializers for loosely-typed request bodies
//!
//! # Example
//!
//! ```ignore
//! use profrate_core::{AppError, hash_password, generate_token};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Professor not found."));
//! let hash = hash_password("secure_password")?;
//! let key = generate_token();
//! ```

pub mod errors;
pub mod password;
pub mod serde;
pub mod token;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use token::generate_token;
