//! Terminal text for each command's response.

use profrate_models::{ModuleInstanceListing, ProfessorModuleAverage, ProfessorRating};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiResponse;

fn decode<T: DeserializeOwned>(body: &Value) -> Option<T> {
    serde_json::from_value(body.clone()).ok()
}

pub fn register(response: &ApiResponse) -> String {
    if response.status == StatusCode::CREATED {
        "User registered successfully!".to_string()
    } else {
        format!("Registration failed: {}", response.error_message())
    }
}

pub fn login(response: &ApiResponse) -> String {
    if response.status == StatusCode::OK {
        "Login successful!".to_string()
    } else {
        format!("Login failed: {}", response.error_message())
    }
}

pub fn logout(response: &ApiResponse) -> String {
    if response.status == StatusCode::OK {
        "Logout successful!".to_string()
    } else {
        format!("Logout failed: {}", response.error_message())
    }
}

pub fn module_instances(response: &ApiResponse) -> String {
    let listings = match decode::<Vec<ModuleInstanceListing>>(&response.body) {
        Some(listings) if response.status == StatusCode::OK => listings,
        _ => return format!("Error retrieving module instances: {}", response.body),
    };

    if listings.is_empty() {
        return "No module instances found.".to_string();
    }

    let mut lines = Vec::new();
    for listing in &listings {
        lines.push(format!(
            "\n- {}, {} | Year: {}, Semester: {}",
            listing.module_code, listing.module_name, listing.year, listing.semester
        ));
        lines.push("  Taught by:".to_string());
        if listing.professors.is_empty() {
            lines.push("  - No professors assigned.".to_string());
        }
        for professor in &listing.professors {
            lines.push(format!(
                "  - Professor {} (ID: {})",
                professor.name, professor.code
            ));
        }
    }
    lines.join("\n")
}

pub fn professor_ratings(response: &ApiResponse) -> String {
    let ratings = match decode::<Vec<ProfessorRating>>(&response.body) {
        Some(ratings) if response.status == StatusCode::OK => ratings,
        _ => return format!("Error retrieving ratings: {}", response.body),
    };

    if ratings.is_empty() {
        return "No ratings found.".to_string();
    }

    ratings
        .iter()
        .map(|rating| {
            format!(
                "\n- Professor {} (ID: {}) has an average rating of {}",
                rating.professor_name, rating.professor_code, rating.avg_rating
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The server reports two decimals; the terminal shows whole stars.
pub fn professor_average(response: &ApiResponse) -> String {
    if response.status != StatusCode::OK {
        return format!("Error retrieving average rating: {}", response.body);
    }

    match decode::<ProfessorModuleAverage>(&response.body) {
        Some(average) => format!(
            "\nProfessor {} ({}) in module {} ({}) has an average rating of {}.",
            average.professor_name,
            average.professor_id,
            average.module_name,
            average.module_code,
            average.average_rating.round() as i64
        ),
        None => "No ratings found for this professor in this module.".to_string(),
    }
}

pub fn rating_submission(response: &ApiResponse) -> String {
    if response.status == StatusCode::CREATED {
        "Rating submitted successfully!".to_string()
    } else {
        format!("Error submitting rating: {}", response.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: StatusCode, body: Value) -> ApiResponse {
        ApiResponse { status, body }
    }

    #[test]
    fn test_register_messages() {
        let ok = response(StatusCode::CREATED, json!({ "message": "User registered!" }));
        assert_eq!(register(&ok), "User registered successfully!");

        let taken = response(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Username already exists." }),
        );
        assert_eq!(
            register(&taken),
            "Registration failed: Username already exists."
        );
    }

    #[test]
    fn test_login_failure_without_error_field() {
        let failed = response(StatusCode::BAD_REQUEST, Value::Null);
        assert_eq!(login(&failed), "Login failed: Unknown error");
    }

    #[test]
    fn test_module_instances_listing() {
        let listing = response(
            StatusCode::OK,
            json!([{
                "module_code": "CD1",
                "module_name": "Computing for Dummies",
                "year": 2017,
                "semester": 1,
                "professors": [
                    { "code": "JE1", "name": "J. Excellent" },
                    { "code": "VS1", "name": "V. Smart" }
                ]
            }]),
        );

        assert_eq!(
            module_instances(&listing),
            "\n- CD1, Computing for Dummies | Year: 2017, Semester: 1\n  Taught by:\n  - Professor J. Excellent (ID: JE1)\n  - Professor V. Smart (ID: VS1)"
        );
    }

    #[test]
    fn test_empty_collections() {
        let empty = response(StatusCode::OK, json!([]));
        assert_eq!(module_instances(&empty), "No module instances found.");
        assert_eq!(professor_ratings(&empty), "No ratings found.");
    }

    #[test]
    fn test_professor_ratings() {
        let ratings = response(
            StatusCode::OK,
            json!([{ "professor__code": "JE1", "professor__name": "J. Excellent", "avg_rating": 4 }]),
        );
        assert_eq!(
            professor_ratings(&ratings),
            "\n- Professor J. Excellent (ID: JE1) has an average rating of 4"
        );
    }

    #[test]
    fn test_professor_average_is_rounded() {
        let average = response(
            StatusCode::OK,
            json!({
                "professor_id": "JE1",
                "professor_name": "J. Excellent",
                "module_code": "CD1",
                "module_name": "Computing for Dummies",
                "average_rating": 3.67
            }),
        );
        assert_eq!(
            professor_average(&average),
            "\nProfessor J. Excellent (JE1) in module Computing for Dummies (CD1) has an average rating of 4."
        );
    }

    #[test]
    fn test_professor_average_not_found() {
        let missing = response(
            StatusCode::NOT_FOUND,
            json!({ "error": "Professor not found." }),
        );
        assert_eq!(
            professor_average(&missing),
            "Error retrieving average rating: {\"error\":\"Professor not found.\"}"
        );
    }

    #[test]
    fn test_rating_submission() {
        let ok = response(StatusCode::CREATED, json!({ "message": "Your rating has been submitted." }));
        assert_eq!(rating_submission(&ok), "Rating submitted successfully!");

        let bad = response(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Rating must be between 1 and 5." }),
        );
        assert_eq!(
            rating_submission(&bad),
            "Error submitting rating: Rating must be between 1 and 5."
        );
    }
}
