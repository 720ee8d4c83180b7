// libs/planning-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use shared_models::{AppError, BookAppointmentRequest, CalendarDate, PlanningConfiguration};
use shared_store::AppState;

use crate::error::PlanningError;
use crate::models::SlotsQuery;
use crate::services::{booking, configuration, slots};

/// List the day's slots for a doctor, optionally restricted to the slots
/// able to host a given consultation type.
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Value>, AppError> {
    let date = CalendarDate::parse_display(&query.date)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {}", query.date)))?;

    let config = configuration::get_or_default(state.planning.as_ref(), &query.doctor)
        .await
        .map_err(|e| {
            error!("Failed to load planning configuration: {}", e);
            AppError::Internal("Failed to load planning configuration".to_string())
        })?;

    let appointments = state.appointments.list_all().await.map_err(|e| {
        error!("Failed to list appointments: {}", e);
        AppError::Internal("Failed to list appointments".to_string())
    })?;

    let generated = slots::generate_slots(&date, &config, &appointments, &state.catalog);
    let slots = match query.type_id.as_deref() {
        Some(type_id) => slots::available_slots_for_type(&generated, type_id, &state.catalog),
        None => generated,
    };

    let available_count = slots.iter().filter(|slot| slot.is_bookable()).count();

    Ok(Json(json!({
        "doctor": query.doctor,
        "date": date.display(),
        "slots": slots,
        "available_count": available_count,
    })))
}

/// The static consultation-type catalog.
pub async fn get_types(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "types": state.catalog }))
}

pub async fn get_configuration(
    State(state): State<Arc<AppState>>,
    Path(doctor): Path<String>,
) -> Result<Json<PlanningConfiguration>, AppError> {
    let config = configuration::get_or_default(state.planning.as_ref(), &doctor)
        .await
        .map_err(|e| {
            error!("Failed to load planning configuration: {}", e);
            AppError::Internal("Failed to load planning configuration".to_string())
        })?;

    Ok(Json(config))
}

pub async fn put_configuration(
    State(state): State<Arc<AppState>>,
    Path(doctor): Path<String>,
    Json(mut config): Json<PlanningConfiguration>,
) -> Result<Json<Value>, AppError> {
    // The path segment owns the identity, not the body.
    config.doctor_email = doctor.clone();

    configuration::save_configuration(state.planning.as_ref(), config)
        .await
        .map_err(|e| {
            error!("Failed to save planning configuration: {}", e);
            AppError::Internal("Failed to save planning configuration".to_string())
        })?;

    info!("Saved planning configuration for {}", doctor);
    Ok(Json(json!({ "success": true, "doctor": doctor })))
}

/// Book a free slot. Placement is re-validated against a freshly
/// generated slot map right before the write.
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let now = state.clock.now();

    let appointment = booking::book_appointment(&state, request, now)
        .await
        .map_err(|e| match e {
            PlanningError::InvalidDate(_) | PlanningError::UnknownAppointmentType(_) => {
                AppError::BadRequest(e.to_string())
            }
            PlanningError::SlotUnavailable { .. } => AppError::Conflict(e.to_string()),
            PlanningError::Store(inner) => {
                error!("Store error while booking: {}", inner);
                AppError::Internal("Failed to book appointment".to_string())
            }
        })?;

    Ok((StatusCode::CREATED, Json(json!({ "appointment": appointment }))))
}
