//! Authentication models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(
        required(message = "Username or password required."),
        length(min = 1, message = "Username or password required.")
    )]
    pub username: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "Username or password required."),
        length(min = 1, message = "Username or password required.")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_requires_every_field() {
        let dto: RegisterRequest =
            serde_json::from_value(json!({ "username": "alice", "password": "" })).unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(!fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_login_request_valid() {
        let dto: LoginRequest =
            serde_json::from_value(json!({ "username": "alice", "password": "secret" })).unwrap();
        assert!(dto.validate().is_ok());
    }
}
