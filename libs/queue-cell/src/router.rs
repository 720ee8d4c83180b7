use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers::{end_consultation, get_dashboard, start_consultation};

pub fn queue_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/consultations/{id}/start", post(start_consultation))
        .route("/consultations/end", post(end_consultation))
        .with_state(state)
}
