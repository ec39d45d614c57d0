use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use profrate_core::AppError;

use super::model::{
    ErrorResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/register/",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing field, or username/email already exists", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    AuthService::register_user(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered!")),
    ))
}

/// Log in and receive a token
#[utoipa::path(
    post,
    path = "/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing field or invalid credentials", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = AuthService::login_user(&state.db, dto).await?;
    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        token,
    }))
}

/// Log out, revoking the caller's token
#[utoipa::path(
    post,
    path = "/logout/",
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("token_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user.id = auth_user.user_id()))]
pub async fn logout_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::logout_user(&state.db, &auth_user.token).await?;
    Ok(Json(MessageResponse::new("Logout successful!")))
}
