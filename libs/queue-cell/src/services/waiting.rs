// libs/queue-cell/src/services/waiting.rs
use chrono::{DateTime, Duration, Utc};

use shared_models::{Appointment, AppointmentStatus, CalendarDate};
use shared_utils::time::{time_sort_key, WAITING_ROOM_LEAD_MINUTES};

/// Patients currently in the waiting room: confirmed, not yet started,
/// and `now` inside the half-open window
/// `[scheduled − lead, scheduled)`. Exactly at the scheduled time the
/// patient is no longer waiting; the consultation should be starting.
pub fn waiting_room_members(appointments: &[Appointment], now: DateTime<Utc>) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| {
            appointment.status == AppointmentStatus::Confirmed && !appointment.has_started()
        })
        .filter(|appointment| {
            appointment
                .scheduled_instant()
                .map(|scheduled| {
                    let opens = scheduled - Duration::minutes(WAITING_ROOM_LEAD_MINUTES);
                    now >= opens && now < scheduled
                })
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// The earliest confirmed, not-yet-started appointment of the current
/// day.
pub fn next_appointment(appointments: &[Appointment], now: DateTime<Utc>) -> Option<Appointment> {
    let today = CalendarDate::new(now.date_naive());

    appointments
        .iter()
        .filter(|appointment| {
            appointment.is_on(&today)
                && appointment.status == AppointmentStatus::Confirmed
                && !appointment.has_started()
        })
        .min_by_key(|appointment| time_sort_key(&appointment.time))
        .cloned()
}

/// Running consultation duration as "MM:SS". Negative spans (clock skew)
/// display as 00:00.
pub fn format_elapsed(started: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - started).num_seconds().max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
