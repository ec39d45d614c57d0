//! Landing route describing the API.

pub mod controller;
pub mod router;
