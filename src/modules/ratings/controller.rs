use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use profrate_core::AppError;
use profrate_models::{ErrorResponse, MessageResponse};

use super::model::{
    AverageNotFoundResponse, ModuleAverage, ProfessorModuleAverage, ProfessorRating,
    RateProfessorRequest,
};
use super::service::RatingService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::json_rejection_to_error;

/// Overall average rating of every rated professor
#[utoipa::path(
    get,
    path = "/view/",
    responses(
        (status = 200, description = "One row per rated professor, average rounded to an integer", body = Vec<ProfessorRating>)
    ),
    tag = "Ratings"
)]
#[instrument(skip(state))]
pub async fn get_professor_ratings(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfessorRating>>, AppError> {
    let ratings = RatingService::professor_ratings(&state.db).await?;
    Ok(Json(ratings))
}

/// Average rating of a professor in one module
#[utoipa::path(
    get,
    path = "/average/{professor_code}/{module_code}/",
    params(
        ("professor_code" = String, Path, description = "Professor code, e.g. JE1"),
        ("module_code" = String, Path, description = "Module code, e.g. CD1")
    ),
    responses(
        (status = 200, description = "Average rounded to two decimals", body = ProfessorModuleAverage),
        (status = 404, description = "No ratings yet (`professor_id`, `module_code`, `error`), or an unknown professor or module code (`error` only)", body = AverageNotFoundResponse)
    ),
    tag = "Ratings"
)]
#[instrument(skip(state))]
pub async fn get_professor_module_average(
    State(state): State<AppState>,
    Path((professor_code, module_code)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let average =
        RatingService::professor_module_average(&state.db, &professor_code, &module_code).await?;

    Ok(match average {
        ModuleAverage::Rated(average) => Json(average).into_response(),
        ModuleAverage::NoRatings(body) => (
            StatusCode::NOT_FOUND,
            Json(AverageNotFoundResponse::NoRatings(body)),
        )
            .into_response(),
    })
}

/// Rate a professor for a module instance
#[utoipa::path(
    post,
    path = "/rate/",
    request_body = RateProfessorRequest,
    responses(
        (status = 201, description = "Rating stored", body = MessageResponse),
        (status = 400, description = "Invalid year, semester or rating", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown professor, module or module instance", body = ErrorResponse)
    ),
    tag = "Ratings",
    security(("token_auth" = []))
)]
#[instrument(skip(state, auth_user, body), fields(user.id = auth_user.user_id()))]
pub async fn rate_professor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    body: Result<Json<RateProfessorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(request) = body.map_err(json_rejection_to_error)?;

    RatingService::rate_professor(&state.db, &state.rating_config, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Your rating has been submitted.")),
    ))
}
