// libs/queue-cell/src/services/delay.rs
use chrono::{DateTime, Utc};

use shared_models::{Appointment, AppointmentStatus, CalendarDate};
use shared_utils::time::{time_sort_key, SLOT_DURATION_MINUTES};

/// Estimated backlog for the doctor's day, in minutes, never negative.
///
/// A simple additive model over today's confirmed and in-progress
/// appointments in time order: consultations that ran (or are running)
/// past their planned duration contribute the overage, and appointments
/// whose slot has passed without starting contribute the full wait since
/// their scheduled time. Delays are assumed to compound linearly; the
/// doctor recovering time is not modeled.
pub fn estimate_delay(appointments: &[Appointment], now: DateTime<Utc>) -> i64 {
    let today = CalendarDate::new(now.date_naive());

    let mut queue: Vec<&Appointment> = appointments
        .iter()
        .filter(|appointment| {
            appointment.is_on(&today)
                && matches!(
                    appointment.status,
                    AppointmentStatus::Confirmed | AppointmentStatus::InProgress
                )
        })
        .collect();
    queue.sort_by_key(|appointment| time_sort_key(&appointment.time));

    let mut backlog: i64 = 0;
    for appointment in queue {
        if let Some(started) = appointment.actual_start_time {
            let elapsed = (appointment.actual_end_time.unwrap_or(now) - started).num_minutes();
            let planned = if appointment.duration_minutes > 0 {
                appointment.duration_minutes
            } else {
                SLOT_DURATION_MINUTES
            };
            if elapsed > planned {
                backlog += elapsed - planned;
            }
        } else if let Some(scheduled) = appointment.scheduled_instant() {
            // Should have started already but has not.
            if scheduled < now {
                backlog += (now - scheduled).num_minutes();
            }
        }
    }

    backlog.max(0)
}
