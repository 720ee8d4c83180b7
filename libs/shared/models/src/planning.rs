// libs/shared/models/src/planning.rs
use serde::{Deserialize, Serialize};

/// A doctor's planning configuration: which days they work, the working
/// hour ranges of those days, and the buffer policy.
///
/// Ranges are not required to be sorted or non-overlapping by
/// construction; they are validated on use, not on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfiguration {
    pub doctor_email: String,
    pub mode: PlanningMode,
    /// Working day indices, 0 = Sunday .. 6 = Saturday.
    pub working_days: Vec<u32>,
    /// Ordered working-hour ranges, possibly several disjoint ranges per
    /// day (morning + afternoon).
    pub working_hours: Vec<TimeRange>,
    pub buffer: BufferPolicy,
    /// Observed average consultation duration, informational only.
    pub average_consultation_minutes: Option<i64>,
}

impl PlanningConfiguration {
    /// Documented defaults used whenever a doctor has no stored
    /// configuration: weekdays, 9-12 / 14-18, a buffer every 3
    /// consultations.
    pub fn default_for(doctor_email: &str) -> Self {
        Self {
            doctor_email: doctor_email.to_string(),
            mode: PlanningMode::Strict,
            working_days: vec![1, 2, 3, 4, 5],
            working_hours: vec![
                TimeRange::new("09:00", "12:00"),
                TimeRange::new("14:00", "18:00"),
            ],
            buffer: BufferPolicy::PerConsultations { frequency: 3 },
            average_consultation_minutes: None,
        }
    }

    pub fn works_on(&self, weekday_index: u32) -> bool {
        self.working_days.contains(&weekday_index)
    }
}

/// Stored but not behaviorally differentiated yet; kept so the settings
/// surface can round-trip it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanningMode {
    Strict,
    Flexible,
}

/// A working-hour range, `start` inclusive and `end` exclusive, both
/// "HH:MM".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// How recovery buffers are spread across the day. Persisted per doctor;
/// the generator applies its fixed hourly rhythm regardless (like
/// `PlanningMode`, this is configuration the settings form round-trips).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BufferPolicy {
    PerConsultations { frequency: u32 },
    PerHour,
}
