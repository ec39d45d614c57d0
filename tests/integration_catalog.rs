mod common;

use axum::http::StatusCode;
use common::{create_instance, create_module, create_professor, seed_catalog, send, setup_test_app};
use profrate::cli::seeder::{DEMO_INSTANCES, seed_demo_catalog};
use profrate::modules::catalog::service::CatalogService;
use profrate_config::RatingConfig;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_empty_catalog(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let (status, body) = send(&app, "GET", "/list/", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_module_instances(pool: SqlitePool) {
    seed_catalog(&pool).await;
    let app = setup_test_app(pool);

    let (status, body) = send(&app, "GET", "/list", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "module_code": "CD1",
                "module_name": "Computing for Dummies",
                "year": 2024,
                "semester": 1,
                "professors": [
                    { "code": "JE1", "name": "J. Excellent" },
                    { "code": "VS1", "name": "V. Smart" }
                ]
            },
            {
                "module_code": "PG1",
                "module_name": "Programming for the Gifted",
                "year": 2023,
                "semester": 2,
                "professors": [
                    { "code": "JE1", "name": "J. Excellent" }
                ]
            }
        ])
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_codes_are_rejected(pool: SqlitePool) {
    create_professor(&pool, "JE1", "J. Excellent").await;
    create_module(&pool, "CD1", "Computing for Dummies").await;

    let err = CatalogService::create_professor(
        &pool,
        profrate_models::CreateProfessorDto {
            code: "JE1".to_string(),
            name: "Someone Else".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Professor code already exists.");

    let err = CatalogService::create_module(
        &pool,
        profrate_models::CreateModuleDto {
            code: "CD1".to_string(),
            name: "Another Module".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.message(), "Module code already exists.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_professor_cascades(pool: SqlitePool) {
    seed_catalog(&pool).await;
    sqlx::query(
        "INSERT INTO ratings (professor_id, module_instance_id, rating)
         SELECT p.id, mi.id, 4 FROM professors p, module_instances mi WHERE p.code = 'VS1'",
    )
    .execute(&pool)
    .await
    .unwrap();

    CatalogService::delete_professor(&pool, "VS1").await.unwrap();

    let ratings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(ratings, 0);

    let app = setup_test_app(pool.clone());
    let (_, body) = send(&app, "GET", "/list/", None, None).await;
    assert_eq!(body[0]["professors"], json!([{ "code": "JE1", "name": "J. Excellent" }]));

    let err = CatalogService::delete_professor(&pool, "VS1").await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_module_drops_instances(pool: SqlitePool) {
    seed_catalog(&pool).await;

    CatalogService::delete_module(&pool, "CD1").await.unwrap();

    let app = setup_test_app(pool);
    let (_, body) = send(&app, "GET", "/list/", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["module_code"], "PG1");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_instance_year_outside_range(pool: SqlitePool) {
    create_professor(&pool, "JE1", "J. Excellent").await;
    create_module(&pool, "CD1", "Computing for Dummies").await;
    create_instance(&pool, "CD1", 2000, 1, &["JE1"]).await;

    let err = CatalogService::create_module_instance(
        &pool,
        &RatingConfig::default(),
        profrate_models::CreateModuleInstanceDto {
            module_code: "CD1".to_string(),
            year: 1999,
            semester: 1,
            professor_codes: vec!["JE1".to_string()],
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_is_idempotent(pool: SqlitePool) {
    let first = seed_demo_catalog(&pool, &RatingConfig::default()).await.unwrap();
    assert_eq!(first.professors, 4);
    assert_eq!(first.modules, 2);
    assert_eq!(first.module_instances, DEMO_INSTANCES.len());

    let second = seed_demo_catalog(&pool, &RatingConfig::default()).await.unwrap();
    assert_eq!(second.professors, 0);
    assert_eq!(second.modules, 0);
    assert_eq!(second.module_instances, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_home_lists_routes(pool: SqlitePool) {
    let app = setup_test_app(pool);

    let (status, body) = send(&app, "GET", "/", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert!(
        body["routes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|route| route.as_str().unwrap().contains("/rate/"))
    );
}
