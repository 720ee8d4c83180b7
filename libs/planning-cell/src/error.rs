use thiserror::Error;

use shared_store::StoreError;

#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown appointment type: {0}")]
    UnknownAppointmentType(String),

    #[error("Slot not available at {time} on {date}")]
    SlotUnavailable { date: String, time: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
