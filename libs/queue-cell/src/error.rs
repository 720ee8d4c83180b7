use thiserror::Error;
use uuid::Uuid;

use shared_models::AppointmentStatus;
use shared_store::StoreError;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(Uuid),

    #[error("Cannot start a consultation with status {0}")]
    NotConfirmed(AppointmentStatus),

    #[error("Another consultation is already in progress for this doctor")]
    ConsultationInProgress,

    #[error("No consultation is in progress for this doctor")]
    NoConsultationInProgress,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
