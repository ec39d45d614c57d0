use axum::{Json, extract::State};
use tracing::instrument;

use profrate_core::AppError;

use super::model::ModuleInstanceListing;
use super::service::CatalogService;
use crate::state::AppState;

/// List every module instance with the professors who teach it
#[utoipa::path(
    get,
    path = "/list/",
    responses(
        (status = 200, description = "Module instances in storage order", body = Vec<ModuleInstanceListing>)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn list_module_instances(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModuleInstanceListing>>, AppError> {
    let instances = CatalogService::list_module_instances(&state.db).await?;
    Ok(Json(instances))
}
