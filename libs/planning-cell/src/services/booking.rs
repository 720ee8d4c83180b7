// libs/planning-cell/src/services/booking.rs
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use shared_models::{
    slot_count_for, Appointment, AppointmentStatus, BookAppointmentRequest, CalendarDate,
};
use shared_store::AppState;
use shared_utils::time::SLOT_DURATION_MINUTES;

use crate::error::PlanningError;
use crate::services::configuration;
use crate::services::slots::{can_place, generate_slots};

/// Book a slot for a patient.
///
/// The slot map is regenerated from the current appointment list and the
/// placement re-checked immediately before the write, under the shared
/// write lock: neither a stale slot list in the caller nor a concurrent
/// booking can double-book a slot.
pub async fn book_appointment(
    state: &AppState,
    request: BookAppointmentRequest,
    now: DateTime<Utc>,
) -> Result<Appointment, PlanningError> {
    let date = CalendarDate::parse_display(&request.date)
        .ok_or_else(|| PlanningError::InvalidDate(request.date.clone()))?;

    let _guard = state.write_lock.lock().await;

    let config = configuration::get_or_default(state.planning.as_ref(), &request.doctor_email).await?;
    let appointments = state.appointments.list_all().await?;
    let slots = generate_slots(&date, &config, &appointments, &state.catalog);

    let placeable = match request.appointment_type_id.as_deref() {
        Some(type_id) => {
            if !state.catalog.iter().any(|t| t.id == type_id) {
                return Err(PlanningError::UnknownAppointmentType(type_id.to_string()));
            }
            can_place(&date, &request.time, type_id, &slots, &state.catalog)
        }
        // Untyped bookings take a single slot.
        None => slots
            .iter()
            .any(|slot| slot.time == request.time && slot.is_bookable()),
    };

    if !placeable {
        warn!(
            "Rejected booking for {} at {} on {}: slot not available",
            request.patient_email, request.time, request.date
        );
        return Err(PlanningError::SlotUnavailable {
            date: request.date,
            time: request.time,
        });
    }

    let footprint = slot_count_for(request.appointment_type_id.as_deref(), &state.catalog);
    let appointment = Appointment {
        id: Uuid::new_v4(),
        patient_name: request.patient_name,
        patient_email: request.patient_email,
        doctor_name: request.doctor_name,
        doctor_email: request.doctor_email,
        date: date.display(),
        time: request.time,
        status: AppointmentStatus::Confirmed,
        kind: request.kind,
        appointment_type_id: request.appointment_type_id,
        duration_minutes: footprint as i64 * SLOT_DURATION_MINUTES,
        reason: request.reason,
        symptoms: request.symptoms,
        notes: None,
        actual_start_time: None,
        actual_end_time: None,
        created_at: now,
        updated_at: now,
    };

    state.appointments.insert(appointment.clone()).await?;
    info!(
        "Booked appointment {} for {} at {} on {}",
        appointment.id, appointment.patient_email, appointment.time, appointment.date
    );

    Ok(appointment)
}
