#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use profrate::modules::catalog::model::{
    CreateModuleDto, CreateModuleInstanceDto, CreateProfessorDto,
};
use profrate::modules::catalog::service::CatalogService;
use profrate::router::init_router;
use profrate::state::AppState;
use profrate_config::{CorsConfig, RatingConfig};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub fn setup_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        db: pool,
        rating_config: RatingConfig::default(),
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Token {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn register_user(app: &Router, username: &str, password: &str) -> StatusCode {
    let (status, _) = send(
        app,
        "POST",
        "/register/",
        None,
        Some(json!({
            "username": username,
            "password": password,
            "email": format!("{}@example.com", username),
        })),
    )
    .await;
    status
}

/// Registers `username` and returns a fresh login token.
pub async fn register_and_login(app: &Router, username: &str) -> String {
    let password = "correct-horse";
    assert_eq!(
        register_user(app, username, password).await,
        StatusCode::CREATED
    );

    let (status, body) = send(
        app,
        "POST",
        "/login/",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn create_professor(pool: &SqlitePool, code: &str, name: &str) {
    CatalogService::create_professor(
        pool,
        CreateProfessorDto {
            code: code.to_string(),
            name: name.to_string(),
        },
    )
    .await
    .unwrap();
}

pub async fn create_module(pool: &SqlitePool, code: &str, name: &str) {
    CatalogService::create_module(
        pool,
        CreateModuleDto {
            code: code.to_string(),
            name: name.to_string(),
        },
    )
    .await
    .unwrap();
}

pub async fn create_instance(
    pool: &SqlitePool,
    module_code: &str,
    year: i64,
    semester: i64,
    professor_codes: &[&str],
) {
    CatalogService::create_module_instance(
        pool,
        &RatingConfig::default(),
        CreateModuleInstanceDto {
            module_code: module_code.to_string(),
            year,
            semester,
            professor_codes: professor_codes.iter().map(|c| c.to_string()).collect(),
        },
    )
    .await
    .unwrap();
}

/// JE1 and VS1 teach CD1 in 2024 semester 1; JE1 also teaches PG1 in 2023
/// semester 2.
pub async fn seed_catalog(pool: &SqlitePool) {
    create_professor(pool, "JE1", "J. Excellent").await;
    create_professor(pool, "VS1", "V. Smart").await;
    create_module(pool, "CD1", "Computing for Dummies").await;
    create_module(pool, "PG1", "Programming for the Gifted").await;
    create_instance(pool, "CD1", 2024, 1, &["JE1", "VS1"]).await;
    create_instance(pool, "PG1", 2023, 2, &["JE1"]).await;
}

pub fn rating_body(professor: &str, module: &str, year: Value, semester: Value, rating: Value) -> Value {
    json!({
        "professor_id": professor,
        "module_code": module,
        "year": year,
        "semester": semester,
        "rating": rating,
    })
}

pub async fn rate(app: &Router, token: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", "/rate/", Some(token), Some(body)).await
}
