//! Administration helpers used by the `profrate-admin` binary.
//!
//! - [`seeder`]: Populates a demo catalog of professors, modules and
//!   module instances

pub mod seeder;
