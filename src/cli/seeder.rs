//! Demo catalog seeding.
//!
//! Inserts a fixed set of professors, modules and module instances so a
//! fresh database can be exercised with the command-line client. Entries
//! that already exist (by code) are left untouched, so seeding twice is
//! harmless.

use std::time::Instant;

use profrate_config::RatingConfig;
use profrate_core::AppError;
use sqlx::SqlitePool;
use tracing::info;

use crate::modules::catalog::model::{
    CreateModuleDto, CreateModuleInstanceDto, CreateProfessorDto,
};
use crate::modules::catalog::service::CatalogService;

pub const DEMO_PROFESSORS: [(&str, &str); 4] = [
    ("JE1", "J. Excellent"),
    ("VS1", "V. Smart"),
    ("TT1", "T. Terrible"),
    ("BB1", "B. Bad"),
];

pub const DEMO_MODULES: [(&str, &str); 2] = [
    ("CD1", "Computing for Dummies"),
    ("PG1", "Programming for the Gifted"),
];

/// (module code, year, semester, professor codes)
pub const DEMO_INSTANCES: [(&str, i64, i64, &[&str]); 4] = [
    ("CD1", 2017, 1, &["JE1", "VS1"]),
    ("CD1", 2018, 2, &["JE1"]),
    ("PG1", 2017, 2, &["TT1", "BB1", "JE1"]),
    ("PG1", 2018, 1, &["VS1"]),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub professors: usize,
    pub modules: usize,
    pub module_instances: usize,
}

pub async fn seed_demo_catalog(
    db: &SqlitePool,
    config: &RatingConfig,
) -> Result<SeedSummary, AppError> {
    let start_time = Instant::now();
    let mut summary = SeedSummary::default();

    for (code, name) in DEMO_PROFESSORS {
        if CatalogService::find_professor(db, code).await?.is_none() {
            CatalogService::create_professor(
                db,
                CreateProfessorDto {
                    code: code.to_string(),
                    name: name.to_string(),
                },
            )
            .await?;
            summary.professors += 1;
        }
    }

    for (code, name) in DEMO_MODULES {
        if CatalogService::find_module(db, code).await?.is_none() {
            CatalogService::create_module(
                db,
                CreateModuleDto {
                    code: code.to_string(),
                    name: name.to_string(),
                },
            )
            .await?;
            summary.modules += 1;
        }
    }

    for (module_code, year, semester, professors) in DEMO_INSTANCES {
        let module = CatalogService::get_module(db, module_code).await?;
        if CatalogService::find_module_instance(db, module.id, year, semester)
            .await?
            .is_some()
        {
            continue;
        }

        CatalogService::create_module_instance(
            db,
            config,
            CreateModuleInstanceDto {
                module_code: module_code.to_string(),
                year,
                semester,
                professor_codes: professors.iter().map(|p| p.to_string()).collect(),
            },
        )
        .await?;
        summary.module_instances += 1;
    }

    info!(
        professors = summary.professors,
        modules = summary.modules,
        module_instances = summary.module_instances,
        elapsed_ms = %start_time.elapsed().as_millis(),
        "Demo catalog seeded"
    );

    Ok(summary)
}
