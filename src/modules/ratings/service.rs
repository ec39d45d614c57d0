use anyhow::anyhow;
use profrate_config::RatingConfig;
use profrate_core::AppError;
use profrate_core::serde::parse_loose_int;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use super::model::{
    ModuleAverage, NoRatingsResponse, ProfessorModuleAverage, ProfessorRating,
    RateProfessorRequest, ValidatedRating,
};
use crate::modules::catalog::service::CatalogService;

/// Rounds to the nearest integer, halves away from zero.
pub fn round_to_integer(value: f64) -> i64 {
    value.round() as i64
}

pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_field(value: Option<&Value>) -> Option<i64> {
    value.and_then(parse_loose_int)
}

/// Checks year, semester and rating in that order and stops at the first
/// failure.
pub fn validate_rating_input(
    request: &RateProfessorRequest,
    config: &RatingConfig,
) -> Result<ValidatedRating, AppError> {
    let year = parse_field(request.year.as_ref()).ok_or_else(|| {
        AppError::bad_request(anyhow!("Invalid year format. Must be a number."))
    })?;
    if !config.contains_year(year) {
        return Err(AppError::bad_request(anyhow!(
            "Invalid year. Must be between {} and {}.",
            config.min_year,
            config.max_year
        )));
    }

    let semester = parse_field(request.semester.as_ref()).ok_or_else(|| {
        AppError::bad_request(anyhow!("Invalid semester format. Must be a number."))
    })?;
    if !matches!(semester, 1 | 2) {
        return Err(AppError::bad_request(anyhow!(
            "Invalid semester. Must be 1 or 2."
        )));
    }

    let rating = parse_field(request.rating.as_ref()).ok_or_else(|| {
        AppError::bad_request(anyhow!(
            "Invalid rating value. Must be a number between 1 and 5."
        ))
    })?;
    if !(1..=5).contains(&rating) {
        return Err(AppError::bad_request(anyhow!(
            "Rating must be between 1 and 5."
        )));
    }

    Ok(ValidatedRating {
        year,
        semester,
        rating,
    })
}

pub struct RatingService;

impl RatingService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "ratings"))]
    pub async fn professor_ratings(db: &SqlitePool) -> Result<Vec<ProfessorRating>, AppError> {
        #[derive(sqlx::FromRow)]
        struct AverageRow {
            code: String,
            name: String,
            avg_rating: f64,
        }

        let rows = sqlx::query_as::<_, AverageRow>(
            "SELECT p.code, p.name, AVG(r.rating) AS avg_rating
             FROM ratings r
             JOIN professors p ON p.id = r.professor_id
             GROUP BY p.id, p.code, p.name
             ORDER BY p.id",
        )
        .fetch_all(db)
        .await?;

        debug!(count = rows.len(), "Professor averages computed");

        Ok(rows
            .into_iter()
            .map(|row| ProfessorRating {
                professor_code: row.code,
                professor_name: row.name,
                avg_rating: round_to_integer(row.avg_rating),
            })
            .collect())
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "ratings"))]
    pub async fn professor_module_average(
        db: &SqlitePool,
        professor_code: &str,
        module_code: &str,
    ) -> Result<ModuleAverage, AppError> {
        let professor = CatalogService::get_professor(db, professor_code).await?;
        let module = CatalogService::get_module(db, module_code).await?;

        let average: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(r.rating)
             FROM ratings r
             JOIN module_instances mi ON mi.id = r.module_instance_id
             WHERE r.professor_id = ? AND mi.module_id = ?",
        )
        .bind(professor.id)
        .bind(module.id)
        .fetch_one(db)
        .await?;

        Ok(match average {
            Some(average) => ModuleAverage::Rated(ProfessorModuleAverage {
                professor_id: professor.code,
                professor_name: professor.name,
                module_code: module.code,
                module_name: module.name,
                average_rating: round_to_two_decimals(average),
            }),
            None => {
                debug!("No ratings for professor in module");
                ModuleAverage::NoRatings(NoRatingsResponse {
                    professor_id: professor.code,
                    module_code: module.code,
                    error: "No ratings found for this professor in this module.".to_string(),
                })
            }
        })
    }

    /// Validates the request, resolves the module instance it refers to and
    /// stores one rating. Instances are never created here.
    #[instrument(skip(db, config, request), fields(professor.code = ?request.professor_id, module.code = ?request.module_code))]
    pub async fn rate_professor(
        db: &SqlitePool,
        config: &RatingConfig,
        request: RateProfessorRequest,
    ) -> Result<(), AppError> {
        let input = validate_rating_input(&request, config)?;

        let professor_code = request.professor_id.unwrap_or_default();
        let module_code = request.module_code.unwrap_or_default();

        let professor = CatalogService::get_professor(db, &professor_code).await?;
        let module = CatalogService::get_module(db, &module_code).await?;

        let instance =
            CatalogService::find_module_instance(db, module.id, input.year, input.semester)
                .await?
                .ok_or_else(|| {
                    debug!(year = input.year, semester = input.semester, "No matching module instance");
                    AppError::not_found(anyhow!("Module instance not found."))
                })?;

        let rating_id: i64 = sqlx::query_scalar(
            "INSERT INTO ratings (professor_id, module_instance_id, rating) VALUES (?, ?, ?)
             RETURNING id",
        )
        .bind(professor.id)
        .bind(instance.id)
        .bind(input.rating)
        .fetch_one(db)
        .await?;

        info!(
            rating.id = rating_id,
            module_instance.id = instance.id,
            rating = input.rating,
            "Rating submitted"
        );

        Ok(())
    }
}
