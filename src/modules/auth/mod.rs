//! Account registration and token authentication.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
