// libs/queue-cell/src/services/statistics.rs
use shared_models::{Appointment, AppointmentStatus, CalendarDate};

use crate::models::DayStatistics;

/// Count/average summaries over one day's consultations.
///
/// "Completed" means status completed with both actual timestamps
/// recorded. Start delays are floored at zero per appointment; an
/// appointment whose scheduled instant cannot be rebuilt contributes a
/// zero delay rather than being dropped.
pub fn day_statistics(appointments: &[Appointment], date: &CalendarDate) -> DayStatistics {
    let on_day: Vec<&Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.is_on(date))
        .collect();

    let completed: Vec<&Appointment> = on_day
        .iter()
        .copied()
        .filter(|appointment| {
            appointment.status == AppointmentStatus::Completed
                && appointment.actual_start_time.is_some()
                && appointment.actual_end_time.is_some()
        })
        .collect();

    if completed.is_empty() {
        return DayStatistics {
            total_appointments: on_day.len(),
            ..DayStatistics::default()
        };
    }

    let mut total_duration: i64 = 0;
    let mut total_delay: i64 = 0;
    let mut max_delay: i64 = 0;

    for appointment in &completed {
        // Both timestamps present per the filter above.
        let started = appointment.actual_start_time.unwrap();
        let ended = appointment.actual_end_time.unwrap();
        total_duration += (ended - started).num_minutes();

        let delay = appointment
            .scheduled_instant()
            .map(|scheduled| (started - scheduled).num_minutes().max(0))
            .unwrap_or(0);
        total_delay += delay;
        max_delay = max_delay.max(delay);
    }

    let count = completed.len() as f64;
    DayStatistics {
        total_appointments: on_day.len(),
        completed_appointments: completed.len(),
        average_duration: total_duration as f64 / count,
        average_delay: total_delay as f64 / count,
        max_delay,
    }
}
