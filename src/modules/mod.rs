pub mod auth;
pub mod catalog;
pub mod home;
pub mod ratings;

pub use self::auth::model::LoginRequest;
pub use self::catalog::model::ModuleInstanceListing;
