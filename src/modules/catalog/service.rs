use std::collections::HashMap;

use anyhow::anyhow;
use profrate_config::RatingConfig;
use profrate_core::AppError;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

use super::model::{
    CreateModuleDto, CreateModuleInstanceDto, CreateProfessorDto, Module, ModuleInstance,
    ModuleInstanceListing, Professor, ProfessorInfo,
};
use crate::validator::format_errors;

pub struct CatalogService;

impl CatalogService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "module_instances"))]
    pub async fn list_module_instances(
        db: &SqlitePool,
    ) -> Result<Vec<ModuleInstanceListing>, AppError> {
        #[derive(sqlx::FromRow)]
        struct InstanceRow {
            id: i64,
            module_code: String,
            module_name: String,
            year: i64,
            semester: i64,
        }

        #[derive(sqlx::FromRow)]
        struct TeachingRow {
            module_instance_id: i64,
            code: String,
            name: String,
        }

        let instances = sqlx::query_as::<_, InstanceRow>(
            "SELECT mi.id, m.code AS module_code, m.name AS module_name, mi.year, mi.semester
             FROM module_instances mi
             JOIN modules m ON m.id = mi.module_id
             ORDER BY mi.id",
        )
        .fetch_all(db)
        .await?;

        let teaching = sqlx::query_as::<_, TeachingRow>(
            "SELECT mip.module_instance_id, p.code, p.name
             FROM module_instance_professors mip
             JOIN professors p ON p.id = mip.professor_id
             ORDER BY mip.id",
        )
        .fetch_all(db)
        .await?;

        let mut professors: HashMap<i64, Vec<ProfessorInfo>> = HashMap::new();
        for row in teaching {
            professors
                .entry(row.module_instance_id)
                .or_default()
                .push(ProfessorInfo {
                    code: row.code,
                    name: row.name,
                });
        }

        debug!(count = instances.len(), "Module instances fetched");

        Ok(instances
            .into_iter()
            .map(|row| ModuleInstanceListing {
                professors: professors.remove(&row.id).unwrap_or_default(),
                module_code: row.module_code,
                module_name: row.module_name,
                year: row.year,
                semester: row.semester,
            })
            .collect())
    }

    pub async fn find_professor(
        db: &SqlitePool,
        code: &str,
    ) -> Result<Option<Professor>, AppError> {
        let professor =
            sqlx::query_as::<_, Professor>("SELECT id, code, name FROM professors WHERE code = ?")
                .bind(code)
                .fetch_optional(db)
                .await?;
        Ok(professor)
    }

    pub async fn find_module(db: &SqlitePool, code: &str) -> Result<Option<Module>, AppError> {
        let module =
            sqlx::query_as::<_, Module>("SELECT id, code, name FROM modules WHERE code = ?")
                .bind(code)
                .fetch_optional(db)
                .await?;
        Ok(module)
    }

    /// Like [`Self::find_professor`], but a missing professor is a 404.
    pub async fn get_professor(db: &SqlitePool, code: &str) -> Result<Professor, AppError> {
        Self::find_professor(db, code).await?.ok_or_else(|| {
            debug!(professor.code = %code, "Professor not found");
            AppError::not_found(anyhow!("Professor not found."))
        })
    }

    /// Like [`Self::find_module`], but a missing module is a 404.
    pub async fn get_module(db: &SqlitePool, code: &str) -> Result<Module, AppError> {
        Self::find_module(db, code).await?.ok_or_else(|| {
            debug!(module.code = %code, "Module not found");
            AppError::not_found(anyhow!("Module not found."))
        })
    }

    /// First instance (by id) of a module in the given year and semester.
    pub async fn find_module_instance(
        db: &SqlitePool,
        module_id: i64,
        year: i64,
        semester: i64,
    ) -> Result<Option<ModuleInstance>, AppError> {
        let instance = sqlx::query_as::<_, ModuleInstance>(
            "SELECT id, module_id, year, semester FROM module_instances
             WHERE module_id = ? AND year = ? AND semester = ?
             ORDER BY id
             LIMIT 1",
        )
        .bind(module_id)
        .bind(year)
        .bind(semester)
        .fetch_optional(db)
        .await?;
        Ok(instance)
    }

    #[instrument(skip(db, dto), fields(professor.code = %dto.code, db.operation = "INSERT", db.table = "professors"))]
    pub async fn create_professor(
        db: &SqlitePool,
        dto: CreateProfessorDto,
    ) -> Result<Professor, AppError> {
        dto.validate()
            .map_err(|e| AppError::bad_request(anyhow!("{}", format_errors(&e))))?;

        let professor = sqlx::query_as::<_, Professor>(
            "INSERT INTO professors (code, name) VALUES (?, ?) RETURNING id, code, name",
        )
        .bind(&dto.code)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(professor.code = %dto.code, "Professor code already exists");
                return AppError::bad_request(anyhow!("Professor code already exists."));
            }
            error!(error = %e, "Database error creating professor");
            AppError::from(e)
        })?;

        info!(professor.id = professor.id, "Professor created");

        Ok(professor)
    }

    #[instrument(skip(db, dto), fields(module.code = %dto.code, db.operation = "INSERT", db.table = "modules"))]
    pub async fn create_module(db: &SqlitePool, dto: CreateModuleDto) -> Result<Module, AppError> {
        dto.validate()
            .map_err(|e| AppError::bad_request(anyhow!("{}", format_errors(&e))))?;

        let module = sqlx::query_as::<_, Module>(
            "INSERT INTO modules (code, name) VALUES (?, ?) RETURNING id, code, name",
        )
        .bind(&dto.code)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(module.code = %dto.code, "Module code already exists");
                return AppError::bad_request(anyhow!("Module code already exists."));
            }
            error!(error = %e, "Database error creating module");
            AppError::from(e)
        })?;

        info!(module.id = module.id, "Module created");

        Ok(module)
    }

    /// Creates an offering of an existing module taught by existing
    /// professors. The instance and its teaching rows are written in one
    /// transaction.
    #[instrument(skip(db, config, dto), fields(module.code = %dto.module_code, year = dto.year, semester = dto.semester))]
    pub async fn create_module_instance(
        db: &SqlitePool,
        config: &RatingConfig,
        dto: CreateModuleInstanceDto,
    ) -> Result<ModuleInstance, AppError> {
        dto.validate()
            .map_err(|e| AppError::bad_request(anyhow!("{}", format_errors(&e))))?;

        if !config.contains_year(dto.year) {
            return Err(AppError::bad_request(anyhow!(
                "Invalid year. Must be between {} and {}.",
                config.min_year,
                config.max_year
            )));
        }

        let module = Self::get_module(db, &dto.module_code).await?;

        let mut professor_ids = Vec::with_capacity(dto.professor_codes.len());
        for code in &dto.professor_codes {
            let professor = Self::get_professor(db, code).await?;
            if !professor_ids.contains(&professor.id) {
                professor_ids.push(professor.id);
            }
        }

        let mut tx = db.begin().await?;

        let instance = sqlx::query_as::<_, ModuleInstance>(
            "INSERT INTO module_instances (module_id, year, semester) VALUES (?, ?, ?)
             RETURNING id, module_id, year, semester",
        )
        .bind(module.id)
        .bind(dto.year)
        .bind(dto.semester)
        .fetch_one(&mut *tx)
        .await?;

        for professor_id in &professor_ids {
            sqlx::query(
                "INSERT INTO module_instance_professors (module_instance_id, professor_id)
                 VALUES (?, ?)",
            )
            .bind(instance.id)
            .bind(professor_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            module_instance.id = instance.id,
            professors = professor_ids.len(),
            "Module instance created"
        );

        Ok(instance)
    }

    /// Deletes a professor; their ratings and teaching rows cascade.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "professors"))]
    pub async fn delete_professor(db: &SqlitePool, code: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM professors WHERE code = ?")
            .bind(code)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Professor not found.")));
        }

        info!(professor.code = %code, "Professor deleted");
        Ok(())
    }

    /// Deletes a module; its instances and their ratings cascade.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "modules"))]
    pub async fn delete_module(db: &SqlitePool, code: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM modules WHERE code = ?")
            .bind(code)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Module not found.")));
        }

        info!(module.code = %code, "Module deleted");
        Ok(())
    }
}
