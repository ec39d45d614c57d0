//! Professors, modules and module instances.
//!
//! Only the listing is exposed over HTTP; the write operations back the
//! `profrate-admin` tool.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
