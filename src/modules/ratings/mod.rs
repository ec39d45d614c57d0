//! Rating submission and aggregate views.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
