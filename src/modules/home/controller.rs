use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub routes: Vec<String>,
}

const ROUTES: [&str; 7] = [
    "POST /register/",
    "POST /login/",
    "POST /logout/",
    "GET /list/",
    "GET /view/",
    "GET /average/{professor_code}/{module_code}/",
    "POST /rate/",
];

/// Welcome message and route overview
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service overview", body = HomeResponse)
    ),
    tag = "Home"
)]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the professor rating service.".to_string(),
        routes: ROUTES.iter().map(|r| r.to_string()).collect(),
    })
}
