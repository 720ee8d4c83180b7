use std::sync::Arc;

use axum::{routing::get, Router};

use planning_cell::router::planning_routes;
use queue_cell::router::queue_routes;
use shared_store::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Planning engine API is running!" }))
        .nest("/planning", planning_routes(state.clone()))
        .nest("/queue", queue_routes(state.clone()))
}
