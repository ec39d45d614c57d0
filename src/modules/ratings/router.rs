use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_professor_module_average, get_professor_ratings, rate_professor};

pub fn init_ratings_router() -> Router<AppState> {
    Router::new()
        .route("/view/", get(get_professor_ratings))
        .route("/view", get(get_professor_ratings))
        .route(
            "/average/{professor_code}/{module_code}/",
            get(get_professor_module_average),
        )
        .route(
            "/average/{professor_code}/{module_code}",
            get(get_professor_module_average),
        )
        .route("/rate/", post(rate_professor))
        .route("/rate", post(rate_professor))
}
