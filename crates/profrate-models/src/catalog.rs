//! Catalog models: professors, modules and module instances.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Professor {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Module {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// One offering of a module in a given year and semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ModuleInstance {
    pub id: i64,
    pub module_id: i64,
    pub year: i64,
    pub semester: i64,
}

/// Professor as shown inside a module instance listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProfessorInfo {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModuleInstanceListing {
    pub module_code: String,
    pub module_name: String,
    pub year: i64,
    pub semester: i64,
    pub professors: Vec<ProfessorInfo>,
}

impl fmt::Display for ModuleInstanceListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) ({}/{})",
            self.module_name, self.module_code, self.year, self.semester
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProfessorDto {
    #[validate(length(min = 1, max = 10, message = "code must be 1-10 characters"))]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateModuleDto {
    #[validate(length(min = 1, max = 10, message = "code must be 1-10 characters"))]
    pub code: String,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateModuleInstanceDto {
    #[validate(length(min = 1, message = "module_code is required"))]
    pub module_code: String,
    pub year: i64,
    #[validate(range(min = 1, max = 2, message = "semester must be 1 or 2"))]
    pub semester: i64,
    #[validate(length(min = 1, message = "at least one professor is required"))]
    pub professor_codes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_admin_rendering() {
        let professor = Professor {
            id: 1,
            code: "JE1".to_string(),
            name: "J. Excellent".to_string(),
        };
        assert_eq!(professor.to_string(), "J. Excellent (JE1)");

        let listing = ModuleInstanceListing {
            module_code: "CD1".to_string(),
            module_name: "Computing for Dummies".to_string(),
            year: 2024,
            semester: 1,
            professors: vec![],
        };
        assert_eq!(listing.to_string(), "Computing for Dummies (CD1) (2024/1)");
    }

    #[test]
    fn test_create_instance_rejects_bad_semester() {
        let dto = CreateModuleInstanceDto {
            module_code: "CD1".to_string(),
            year: 2024,
            semester: 3,
            professor_codes: vec!["JE1".to_string()],
        };
        assert!(dto.validate().is_err());
    }
}
