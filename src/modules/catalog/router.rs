use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::list_module_instances;

pub fn init_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/list/", get(list_module_instances))
        .route("/list", get(list_module_instances))
}
