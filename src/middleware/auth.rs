use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use profrate_core::AppError;
use profrate_models::User;

use crate::modules::auth::service::AuthService;
use crate::state::AppState;

/// Schemes accepted in the `Authorization` header, compared ignoring case.
const TOKEN_SCHEMES: [&str; 2] = ["Token", "Bearer"];

/// Extractor that resolves the request's token to a user.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.user.id
    }
}

/// Pulls the token out of an `Authorization` header value.
pub fn parse_authorization(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(char::is_whitespace)?;
    if !TOKEN_SCHEMES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(scheme))
    {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Authentication credentials were not provided."))?;

        let token = parse_authorization(auth_header)
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format."))?;

        let user = AuthService::find_user_by_token(&state.db, token)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid token."))?;

        Ok(AuthUser {
            user,
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_scheme() {
        assert_eq!(parse_authorization("Token abc123"), Some("abc123"));
    }

    #[test]
    fn test_parse_bearer_scheme() {
        assert_eq!(parse_authorization("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_parse_scheme_ignores_case() {
        assert_eq!(parse_authorization("token abc123"), Some("abc123"));
        assert_eq!(parse_authorization("TOKEN abc123"), Some("abc123"));
        assert_eq!(parse_authorization("bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert_eq!(parse_authorization("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_authorization("abc123"), None);
        assert_eq!(parse_authorization("Tokenabc123"), None);
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        assert_eq!(parse_authorization("Token "), None);
        assert_eq!(parse_authorization("Bearer    "), None);
    }
}
