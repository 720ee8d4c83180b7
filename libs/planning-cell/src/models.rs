// libs/planning-cell/src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated 15-minute slot of a doctor's day.
///
/// Slots are ephemeral: always regenerated from scratch for a date, never
/// stored. A slot is available only if it is neither occupied by a
/// non-cancelled appointment nor a buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    /// "HH:MM" start of the slot.
    pub time: String,
    /// Display-format date the slot belongs to.
    pub date: String,
    pub is_available: bool,
    pub is_buffer: bool,
    pub appointment_id: Option<Uuid>,
    pub appointment_type_id: Option<String>,
}

impl TimeSlot {
    /// Free for booking: available and not reserved as recovery time.
    pub fn is_bookable(&self) -> bool {
        self.is_available && !self.is_buffer
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotsQuery {
    pub doctor: String,
    pub date: String,
    /// When present, only slots that can host this consultation type are
    /// returned.
    pub type_id: Option<String>,
}
