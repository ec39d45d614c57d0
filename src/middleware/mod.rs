//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: Token authentication
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Token <key>` (or `Bearer <key>`)
//! 2. [`auth::AuthUser`] looks the key up in `auth_tokens`
//! 3. Handler executes with the resolved user, or the request is rejected
//!    with `401 Unauthorized`

pub mod auth;
