// libs/shared/store/src/store.rs
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use shared_models::{Appointment, AppointmentUpdate, PlanningConfiguration};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(Uuid),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The appointment persistence seam. Callers fetch the full list, feed it
/// into the pure planning functions, and write results back; the planning
/// functions themselves never touch the store.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Appointment>, StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError>;

    async fn insert(&self, appointment: Appointment) -> Result<(), StoreError>;

    /// Apply a partial update; fields left `None` are untouched.
    async fn update_by_id(&self, id: Uuid, update: AppointmentUpdate) -> Result<(), StoreError>;
}

/// Per-doctor planning configuration persistence. Absence is not an
/// error; callers fall back to the documented defaults.
#[async_trait]
pub trait PlanningStore: Send + Sync {
    async fn get_by_doctor(
        &self,
        doctor_email: &str,
    ) -> Result<Option<PlanningConfiguration>, StoreError>;

    async fn save(&self, configuration: PlanningConfiguration) -> Result<(), StoreError>;
}
