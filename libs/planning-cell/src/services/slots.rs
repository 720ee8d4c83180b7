// libs/planning-cell/src/services/slots.rs
//
// Slot generation and placement checks. Everything here is a pure
// function over an in-memory snapshot of the appointment list: no I/O,
// no errors, empty output on malformed-but-well-typed input.

use std::collections::HashMap;

use tracing::debug;

use shared_models::{
    slot_count_for, Appointment, AppointmentType, CalendarDate, PlanningConfiguration,
};
use shared_utils::time::{add_minutes, minute_of_hour, minutes_of_day, SLOT_DURATION_MINUTES};

use crate::models::TimeSlot;

/// Generate the ordered slot list for one day of a doctor's calendar.
///
/// Ranges are walked in configured order, each in fixed 15-minute steps
/// with the range end exclusive. Within a range, every full hour after the
/// first four slots is reserved as a buffer: the slot counter restarts at
/// each range, so morning and afternoon each get their own buffer rhythm
/// (kept as-is pending product clarification).
///
/// Overlapping ranges double-emit the overlapping region; callers get the
/// list in generation order, which is also the patient-facing order.
/// A range that is malformed or does not run forward within the day
/// ("22:00"-"02:00") contributes no slots; "24:00" is a valid exclusive
/// end meaning midnight.
pub fn generate_slots(
    date: &CalendarDate,
    config: &PlanningConfiguration,
    appointments: &[Appointment],
    types: &[AppointmentType],
) -> Vec<TimeSlot> {
    if !config.works_on(date.weekday_index()) {
        return Vec::new();
    }

    let day_key = date.display();
    let occupied = occupied_times(date, appointments, types);

    let mut slots = Vec::new();
    for range in &config.working_hours {
        // Walk on accumulated minutes, not on the clock face: the "HH:MM"
        // step wraps at midnight and would cycle forever against an end
        // like "24:00". Malformed or non-forward ranges yield nothing.
        let (Some(start_minutes), Some(end_minutes)) =
            (minutes_of_day(&range.start), minutes_of_day(&range.end))
        else {
            continue;
        };

        let mut offset = start_minutes;
        let mut time = range.start.clone();
        // Slots emitted so far in this range; restarts per range.
        let mut emitted: u32 = 0;

        while offset < end_minutes {
            let is_buffer = minute_of_hour(&time) == 0 && emitted > 0 && emitted % 4 == 0;
            let occupant = occupied.get(&time);

            slots.push(TimeSlot {
                time: time.clone(),
                date: day_key.clone(),
                is_available: occupant.is_none() && !is_buffer,
                is_buffer,
                appointment_id: occupant.map(|appointment| appointment.id),
                appointment_type_id: occupant
                    .and_then(|appointment| appointment.appointment_type_id.clone()),
            });

            emitted += 1;
            offset += SLOT_DURATION_MINUTES;
            time = add_minutes(&time, SLOT_DURATION_MINUTES);
        }
    }

    debug!(
        "Generated {} slots for {} ({} occupied)",
        slots.len(),
        day_key,
        occupied.len()
    );
    slots
}

/// Map each occupied "HH:MM" to the appointment claiming it. Multi-slot
/// consultation types claim that many consecutive slots from their start
/// time; an unknown type id claims a single slot.
fn occupied_times<'a>(
    date: &CalendarDate,
    appointments: &'a [Appointment],
    types: &[AppointmentType],
) -> HashMap<String, &'a Appointment> {
    let mut occupied = HashMap::new();

    for appointment in appointments {
        if !appointment.is_on(date) || !appointment.status.is_active() {
            continue;
        }

        let footprint = slot_count_for(appointment.appointment_type_id.as_deref(), types);
        let mut time = appointment.time.clone();
        for _ in 0..footprint {
            occupied.entry(time.clone()).or_insert(appointment);
            time = add_minutes(&time, SLOT_DURATION_MINUTES);
        }
    }

    occupied
}

/// Slots where the whole run required by `type_id` fits: every one of the
/// `slot_count` consecutive slots starting there exists, is available and
/// is not a buffer. Unknown types get an empty list.
pub fn available_slots_for_type(
    slots: &[TimeSlot],
    type_id: &str,
    types: &[AppointmentType],
) -> Vec<TimeSlot> {
    let Some(appointment_type) = types.iter().find(|t| t.id == type_id) else {
        return Vec::new();
    };

    slots
        .iter()
        .filter(|slot| run_fits(slots, &slot.time, appointment_type.slot_count))
        .cloned()
        .collect()
}

/// Final guard before writing a booking: can `type_id` start at `time` on
/// `date` against the current slot map? Strict on unknown references:
/// returns `false`, never errors.
pub fn can_place(
    date: &CalendarDate,
    time: &str,
    type_id: &str,
    slots: &[TimeSlot],
    types: &[AppointmentType],
) -> bool {
    let Some(appointment_type) = types.iter().find(|t| t.id == type_id) else {
        return false;
    };

    let day_key = date.display();
    let on_day: Vec<TimeSlot> = slots
        .iter()
        .filter(|slot| slot.date == day_key)
        .cloned()
        .collect();

    run_fits(&on_day, time, appointment_type.slot_count)
}

fn run_fits(slots: &[TimeSlot], start_time: &str, slot_count: u32) -> bool {
    let mut time = start_time.to_string();
    for _ in 0..slot_count {
        match slots.iter().find(|slot| slot.time == time) {
            Some(slot) if slot.is_bookable() => {}
            _ => return false,
        }
        time = add_minutes(&time, SLOT_DURATION_MINUTES);
    }
    slot_count > 0
}
