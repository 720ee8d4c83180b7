// libs/queue-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use shared_models::{AppError, AppointmentStatus, CalendarDate};
use shared_store::AppState;

use crate::error::QueueError;
use crate::models::{DashboardQuery, EndConsultationRequest};
use crate::services::{delay, queue::QueueService, statistics, waiting};

/// One payload with everything the waiting-room view shows: the running
/// consultation, the next patient, who is in the waiting room, the
/// estimated delay and the day's statistics. Recomputed from scratch on
/// every call.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Value>, AppError> {
    let now = state.clock.now();

    let date = match &query.date {
        Some(text) => CalendarDate::parse_display(text)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {}", text)))?,
        None => CalendarDate::new(now.date_naive()),
    };

    let all = state.appointments.list_all().await.map_err(|e| {
        error!("Failed to list appointments: {}", e);
        AppError::Internal("Failed to list appointments".to_string())
    })?;

    let doctors: Vec<_> = all
        .into_iter()
        .filter(|appointment| appointment.doctor_email == query.doctor)
        .collect();

    let in_progress = doctors.iter().find(|appointment| {
        appointment.is_on(&date) && appointment.status == AppointmentStatus::InProgress
    });

    let in_progress_payload = in_progress.map(|appointment| {
        let elapsed = appointment
            .actual_start_time
            .map(|started| waiting::format_elapsed(started, now));
        json!({ "appointment": appointment, "elapsed": elapsed })
    });

    Ok(Json(json!({
        "doctor": query.doctor,
        "date": date.display(),
        "in_progress": in_progress_payload,
        "next": waiting::next_appointment(&doctors, now),
        "waiting_room": waiting::waiting_room_members(&doctors, now),
        "estimated_delay_minutes": delay::estimate_delay(&doctors, now),
        "statistics": statistics::day_statistics(&doctors, &date),
    })))
}

pub async fn start_consultation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = QueueService::new(&state)
        .start_consultation(id)
        .await
        .map_err(map_queue_error)?;

    info!("Consultation {} started", id);
    Ok(Json(json!({ "appointment": appointment })))
}

pub async fn end_consultation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EndConsultationRequest>,
) -> Result<Json<Value>, AppError> {
    let outcome = QueueService::new(&state)
        .end_consultation(&request.doctor)
        .await
        .map_err(map_queue_error)?;

    Ok(Json(json!({
        "completed": outcome.completed,
        "next": outcome.next,
    })))
}

fn map_queue_error(error: QueueError) -> AppError {
    match error {
        QueueError::AppointmentNotFound(_) => AppError::NotFound(error.to_string()),
        QueueError::NotConfirmed(_) => AppError::ValidationError(error.to_string()),
        QueueError::ConsultationInProgress | QueueError::NoConsultationInProgress => {
            AppError::Conflict(error.to_string())
        }
        QueueError::Store(inner) => {
            error!("Store error during queue transition: {}", inner);
            AppError::Internal("Queue transition failed".to_string())
        }
    }
}
