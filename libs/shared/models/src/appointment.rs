// libs/shared/models/src/appointment.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::date::CalendarDate;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked consultation. The single source of truth consumed by slot
/// generation, delay estimation and the live queue.
///
/// `date` carries the locale display string (e.g. "15 Janvier 2025") — the
/// exchange format every day-equality filter in the engine depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_email: String,
    pub doctor_name: String,
    pub doctor_email: String,
    pub date: String,
    /// Scheduled start as "HH:MM".
    pub time: String,
    pub status: AppointmentStatus,
    pub kind: AppointmentKind,
    pub appointment_type_id: Option<String>,
    pub duration_minutes: i64,
    pub reason: Option<String>,
    pub symptoms: Option<String>,
    pub notes: Option<String>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Whether this appointment sits on the given day (exact display-string
    /// equality, per the date exchange contract).
    pub fn is_on(&self, date: &CalendarDate) -> bool {
        self.date == date.display()
    }

    pub fn has_started(&self) -> bool {
        self.actual_start_time.is_some()
    }

    /// Scheduled start as an instant, rebuilt from the display date and
    /// the "HH:MM" time. `None` when either part is malformed. Clock
    /// times are naive UTC; multi-timezone scheduling is out of scope.
    pub fn scheduled_instant(&self) -> Option<DateTime<Utc>> {
        let date = CalendarDate::parse_display(&self.date)?;
        let (hours, minutes) = self.time.split_once(':')?;
        let time = chrono::NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)?;
        Some(date.naive().and_time(time).and_utc())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    InProgress,
}

impl AppointmentStatus {
    /// Statuses that still claim doctor time.
    pub fn is_active(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::InProgress => write!(f, "in_progress"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentKind {
    InPerson,
    VideoCall,
}

// ==============================================================================
// CONSULTATION TYPE CATALOG
// ==============================================================================

/// A named consultation category and the number of consecutive base slots
/// it consumes. Immutable reference data shared by all doctors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentType {
    pub id: String,
    pub name: String,
    pub slot_count: u32,
    pub description: String,
}

/// The static consultation-type catalog.
pub fn default_catalog() -> Vec<AppointmentType> {
    vec![
        AppointmentType {
            id: "standard".to_string(),
            name: "Consultation standard".to_string(),
            slot_count: 1,
            description: "Consultation de suivi classique".to_string(),
        },
        AppointmentType {
            id: "first-visit".to_string(),
            name: "Première consultation".to_string(),
            slot_count: 2,
            description: "Premier rendez-vous avec constitution du dossier".to_string(),
        },
        AppointmentType {
            id: "long".to_string(),
            name: "Consultation longue".to_string(),
            slot_count: 2,
            description: "Consultation approfondie ou bilan complet".to_string(),
        },
        AppointmentType {
            id: "telehealth".to_string(),
            name: "Téléconsultation".to_string(),
            slot_count: 1,
            description: "Consultation en visioconférence".to_string(),
        },
    ]
}

/// Slot footprint for a type id. Unknown or missing ids default to one
/// slot — display is lenient, only placement is strict.
pub fn slot_count_for(type_id: Option<&str>, types: &[AppointmentType]) -> u32 {
    type_id
        .and_then(|id| types.iter().find(|t| t.id == id))
        .map(|t| t.slot_count)
        .unwrap_or(1)
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub doctor_name: String,
    pub doctor_email: String,
    pub date: String,
    pub time: String,
    pub kind: AppointmentKind,
    pub appointment_type_id: Option<String>,
    pub reason: Option<String>,
    pub symptoms: Option<String>,
}

/// Partial update applied through the store; `None` fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
}
