use chrono::Utc;
use uuid::Uuid;

use planning_cell::services::{available_slots_for_type, can_place, generate_slots};
use shared_models::{
    default_catalog, Appointment, AppointmentKind, AppointmentStatus, CalendarDate,
    PlanningConfiguration, TimeRange,
};

// 2025-01-15 is a Wednesday (weekday index 3).
fn wednesday() -> CalendarDate {
    CalendarDate::from_ymd(2025, 1, 15).unwrap()
}

fn config_with_hours(ranges: &[(&str, &str)]) -> PlanningConfiguration {
    let mut config = PlanningConfiguration::default_for("dr.moreau@clinique.fr");
    config.working_hours = ranges
        .iter()
        .map(|(start, end)| TimeRange::new(start, end))
        .collect();
    config
}

fn appointment_at(date: &CalendarDate, time: &str, type_id: Option<&str>) -> Appointment {
    let now = Utc::now();
    Appointment {
        id: Uuid::new_v4(),
        patient_name: "Claire Petit".to_string(),
        patient_email: "claire.petit@example.com".to_string(),
        doctor_name: "Dr Moreau".to_string(),
        doctor_email: "dr.moreau@clinique.fr".to_string(),
        date: date.display(),
        time: time.to_string(),
        status: AppointmentStatus::Confirmed,
        kind: AppointmentKind::InPerson,
        appointment_type_id: type_id.map(str::to_string),
        duration_minutes: 15,
        reason: None,
        symptoms: None,
        notes: None,
        actual_start_time: None,
        actual_end_time: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn short_range_has_no_buffers() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("09:00", "09:45")]),
        &[],
        &default_catalog(),
    );

    let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, vec!["09:00", "09:15", "09:30"]);
    assert!(slots.iter().all(|s| s.is_available && !s.is_buffer));
}

#[test]
fn fifth_slot_of_the_hour_is_a_buffer() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("09:00", "10:15")]),
        &[],
        &default_catalog(),
    );

    assert_eq!(slots.len(), 5);
    let ten = &slots[4];
    assert_eq!(ten.time, "10:00");
    assert!(ten.is_buffer);
    assert!(!ten.is_available);
    assert_eq!(slots.iter().filter(|s| s.is_available).count(), 4);
}

#[test]
fn buffers_repeat_every_hour_within_a_range() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("09:00", "12:00")]),
        &[],
        &default_catalog(),
    );

    // 1-indexed slots 5 and 9 are the hourly buffers, both on a :00.
    let buffers: Vec<(usize, &str)> = slots
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_buffer)
        .map(|(i, s)| (i + 1, s.time.as_str()))
        .collect();
    assert_eq!(buffers, vec![(5, "10:00"), (9, "11:00")]);
}

#[test]
fn buffer_counter_restarts_at_each_range() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("09:00", "10:00"), ("14:00", "15:15")]),
        &[],
        &default_catalog(),
    );

    // The afternoon range starts a fresh rhythm: its first slot sits on a
    // :00 boundary but is never a buffer.
    let two_pm = slots.iter().find(|s| s.time == "14:00").unwrap();
    assert!(!two_pm.is_buffer);
    let three_pm = slots.iter().find(|s| s.time == "15:00").unwrap();
    assert!(three_pm.is_buffer);
}

#[test]
fn range_ending_at_midnight_terminates() {
    // "24:00" is never reachable on the wrapping clock face; the walk
    // must still stop at the end of the day.
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("22:00", "24:00")]),
        &[],
        &default_catalog(),
    );

    let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(
        times,
        vec!["22:00", "22:15", "22:30", "22:45", "23:00", "23:15", "23:30", "23:45"]
    );
    assert!(slots.iter().find(|s| s.time == "23:00").unwrap().is_buffer);
}

#[test]
fn backwards_range_yields_no_slots() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("22:00", "02:00")]),
        &[],
        &default_catalog(),
    );
    assert!(slots.is_empty());
}

#[test]
fn malformed_range_yields_no_slots() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("bogus", "12:00"), ("09:00", "later")]),
        &[],
        &default_catalog(),
    );
    assert!(slots.is_empty());
}

#[test]
fn multi_slot_appointment_claims_consecutive_slots() {
    let date = wednesday();
    let booked = appointment_at(&date, "09:15", Some("long"));
    let slots = generate_slots(
        &date,
        &config_with_hours(&[("09:00", "10:00")]),
        &[booked.clone()],
        &default_catalog(),
    );

    let by_time = |time: &str| slots.iter().find(|s| s.time == time).unwrap();
    assert!(by_time("09:00").is_available);
    assert!(!by_time("09:15").is_available);
    assert!(!by_time("09:30").is_available);
    assert!(by_time("09:45").is_available);
    assert_eq!(by_time("09:15").appointment_id, Some(booked.id));
    assert_eq!(by_time("09:30").appointment_id, Some(booked.id));
}

#[test]
fn cancelled_appointments_free_their_slots() {
    let date = wednesday();
    let mut cancelled = appointment_at(&date, "09:00", None);
    cancelled.status = AppointmentStatus::Cancelled;

    let slots = generate_slots(
        &date,
        &config_with_hours(&[("09:00", "09:30")]),
        &[cancelled],
        &default_catalog(),
    );

    assert!(slots.iter().all(|s| s.is_available));
    assert!(slots.iter().all(|s| s.appointment_id.is_none()));
}

#[test]
fn unknown_type_occupies_a_single_slot() {
    let date = wednesday();
    let booked = appointment_at(&date, "09:00", Some("does-not-exist"));
    let slots = generate_slots(
        &date,
        &config_with_hours(&[("09:00", "09:45")]),
        &[booked],
        &default_catalog(),
    );

    assert!(!slots[0].is_available);
    assert!(slots[1].is_available);
    assert!(slots[2].is_available);
}

#[test]
fn no_slots_outside_working_days() {
    // 2025-01-18 is a Saturday.
    let saturday = CalendarDate::from_ymd(2025, 1, 18).unwrap();
    let slots = generate_slots(
        &saturday,
        &config_with_hours(&[("09:00", "18:00")]),
        &[],
        &default_catalog(),
    );
    assert!(slots.is_empty());
}

#[test]
fn no_slot_carries_a_foreign_appointment() {
    let date = wednesday();
    let first = appointment_at(&date, "09:00", None);
    let second = appointment_at(&date, "09:30", Some("long"));
    let slots = generate_slots(
        &date,
        &config_with_hours(&[("09:00", "10:00")]),
        &[first.clone(), second.clone()],
        &default_catalog(),
    );

    for slot in &slots {
        if let Some(id) = slot.appointment_id {
            assert!(id == first.id || id == second.id);
            assert!(!slot.is_available);
        }
    }
}

#[test]
fn overlapping_ranges_double_emit() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("09:00", "10:00"), ("09:30", "10:30")]),
        &[],
        &default_catalog(),
    );

    let at_nine_thirty = slots.iter().filter(|s| s.time == "09:30").count();
    assert_eq!(at_nine_thirty, 2);
}

#[test]
fn type_filter_only_keeps_full_runs() {
    let date = wednesday();
    let booked = appointment_at(&date, "09:30", None);
    let slots = generate_slots(
        &date,
        &config_with_hours(&[("09:00", "10:00")]),
        &[booked],
        &default_catalog(),
    );

    // "long" needs two consecutive free slots: only 09:00 qualifies
    // (09:15 would run into the 09:30 booking, 09:45 into the range end).
    let fitting = available_slots_for_type(&slots, "long", &default_catalog());
    let times: Vec<&str> = fitting.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, vec!["09:00"]);
}

#[test]
fn type_filter_is_a_subset_of_bookable_slots() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("09:00", "12:00")]),
        &[],
        &default_catalog(),
    );

    let fitting = available_slots_for_type(&slots, "long", &default_catalog());
    assert!(!fitting.is_empty());
    for slot in &fitting {
        assert!(slot.is_available && !slot.is_buffer);
    }
}

#[test]
fn type_filter_rejects_unknown_types() {
    let slots = generate_slots(
        &wednesday(),
        &config_with_hours(&[("09:00", "12:00")]),
        &[],
        &default_catalog(),
    );
    assert!(available_slots_for_type(&slots, "does-not-exist", &default_catalog()).is_empty());
}

#[test]
fn placement_check_is_strict() {
    let date = wednesday();
    let slots = generate_slots(
        &date,
        &config_with_hours(&[("09:00", "10:15")]),
        &[],
        &default_catalog(),
    );
    let types = default_catalog();

    assert!(can_place(&date, "09:00", "standard", &slots, &types));
    assert!(can_place(&date, "09:30", "long", &slots, &types));
    // 09:45 + "long" would need the 10:00 buffer.
    assert!(!can_place(&date, "09:45", "long", &slots, &types));
    // Buffers and missing slots are never placeable.
    assert!(!can_place(&date, "10:00", "standard", &slots, &types));
    assert!(!can_place(&date, "11:00", "standard", &slots, &types));
    // Unknown references fail closed.
    assert!(!can_place(&date, "09:00", "does-not-exist", &slots, &types));
}
