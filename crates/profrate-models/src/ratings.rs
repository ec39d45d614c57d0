//! Rating models and aggregate views.

use profrate_core::serde::deserialize_loose_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::auth::ErrorResponse;

/// Body of `POST /rate/`.
///
/// Numeric fields are kept as raw JSON so the handler can tell a malformed
/// value apart from an out-of-range one.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct RateProfessorRequest {
    /// Professor code, e.g. `JE1`
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub professor_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub module_code: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub year: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub semester: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub rating: Option<Value>,
}

/// One row of `GET /view/`: a professor's overall average, rounded to an
/// integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorRating {
    #[serde(rename = "professor__code")]
    pub professor_code: String,
    #[serde(rename = "professor__name")]
    pub professor_name: String,
    pub avg_rating: i64,
}

/// Response of `GET /average/{professor_code}/{module_code}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorModuleAverage {
    pub professor_id: String,
    pub professor_name: String,
    pub module_code: String,
    pub module_name: String,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoRatingsResponse {
    pub professor_id: String,
    pub module_code: String,
    pub error: String,
}

/// 404 body of `GET /average/{professor_code}/{module_code}/`: either both
/// codes exist but nothing is rated yet, or one of them is unknown.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AverageNotFoundResponse {
    NoRatings(NoRatingsResponse),
    UnknownCode(ErrorResponse),
}
