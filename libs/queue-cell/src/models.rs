// libs/queue-cell/src/models.rs
use serde::{Deserialize, Serialize};

use shared_models::Appointment;

/// Aggregates over one day's completed consultations. All averages are
/// zero when nothing qualifies, never NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayStatistics {
    pub total_appointments: usize,
    pub completed_appointments: usize,
    /// Mean actual consultation length, minutes.
    pub average_duration: f64,
    /// Mean start delay (actual start vs. scheduled), minutes, floored
    /// at zero per appointment.
    pub average_delay: f64,
    pub max_delay: i64,
}

/// Outcome of ending the current consultation: the completed appointment
/// and, when the queue chains forward, the one now in progress.
#[derive(Debug, Clone, Serialize)]
pub struct EndConsultationOutcome {
    pub completed: Appointment,
    pub next: Option<Appointment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardQuery {
    pub doctor: String,
    /// Display-format date; defaults to the clock's current day.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndConsultationRequest {
    pub doctor: String,
}
