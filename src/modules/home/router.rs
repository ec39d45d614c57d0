use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::home;

pub fn init_home_router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
