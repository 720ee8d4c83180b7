use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers::{
    book_appointment, get_configuration, get_slots, get_types, put_configuration,
};

pub fn planning_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/slots", get(get_slots))
        .route("/types", get(get_types))
        .route(
            "/configuration/{doctor}",
            get(get_configuration).put(put_configuration),
        )
        .route("/appointments", post(book_appointment))
        .with_state(state)
}
