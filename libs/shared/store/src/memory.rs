// libs/shared/store/src/memory.rs
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::{Appointment, AppointmentUpdate, PlanningConfiguration};

use crate::store::{AppointmentStore, PlanningStore, StoreError};

/// In-memory appointment store. Last write wins, like the hosted backend
/// it stands in for.
#[derive(Default)]
pub struct InMemoryAppointmentStore {
    appointments: RwLock<HashMap<Uuid, Appointment>>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_appointments(appointments: Vec<Appointment>) -> Self {
        let store = Self::new();
        {
            let mut map = store.appointments.write().await;
            for appointment in appointments {
                map.insert(appointment.id, appointment);
            }
        }
        store
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn list_all(&self) -> Result<Vec<Appointment>, StoreError> {
        let map = self.appointments.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        let map = self.appointments.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn insert(&self, appointment: Appointment) -> Result<(), StoreError> {
        debug!("Inserting appointment {}", appointment.id);
        let mut map = self.appointments.write().await;
        map.insert(appointment.id, appointment);
        Ok(())
    }

    async fn update_by_id(&self, id: Uuid, update: AppointmentUpdate) -> Result<(), StoreError> {
        let mut map = self.appointments.write().await;
        let appointment = map
            .get_mut(&id)
            .ok_or(StoreError::AppointmentNotFound(id))?;

        if let Some(status) = update.status {
            appointment.status = status;
        }
        if let Some(notes) = update.notes {
            appointment.notes = Some(notes);
        }
        if let Some(start) = update.actual_start_time {
            appointment.actual_start_time = Some(start);
        }
        if let Some(end) = update.actual_end_time {
            appointment.actual_end_time = Some(end);
        }
        appointment.updated_at = Utc::now();

        debug!("Updated appointment {}", id);
        Ok(())
    }
}

/// In-memory planning-configuration store, keyed by doctor email.
#[derive(Default)]
pub struct InMemoryPlanningStore {
    configurations: RwLock<HashMap<String, PlanningConfiguration>>,
}

impl InMemoryPlanningStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanningStore for InMemoryPlanningStore {
    async fn get_by_doctor(
        &self,
        doctor_email: &str,
    ) -> Result<Option<PlanningConfiguration>, StoreError> {
        let map = self.configurations.read().await;
        Ok(map.get(doctor_email).cloned())
    }

    async fn save(&self, configuration: PlanningConfiguration) -> Result<(), StoreError> {
        debug!("Saving planning configuration for {}", configuration.doctor_email);
        let mut map = self.configurations.write().await;
        map.insert(configuration.doctor_email.clone(), configuration);
        Ok(())
    }
}
