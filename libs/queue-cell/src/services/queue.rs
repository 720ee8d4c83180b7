// libs/queue-cell/src/services/queue.rs
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::{
    Appointment, AppointmentStatus, AppointmentUpdate, CalendarDate,
};
use shared_store::{AppState, AppointmentStore};
use shared_utils::clock::Clock;
use shared_utils::time::time_sort_key;

use crate::error::QueueError;
use crate::models::EndConsultationOutcome;

/// Drives the consultation lifecycle for a doctor's day.
///
/// All transitions run under one shared lock, making this the single
/// owner of queue-transition decisions: at most one appointment per
/// doctor can be in progress, and two concurrent start calls cannot both
/// succeed.
pub struct QueueService {
    appointments: Arc<dyn AppointmentStore>,
    clock: Arc<dyn Clock>,
    transitions: Arc<Mutex<()>>,
}

impl QueueService {
    pub fn new(state: &AppState) -> Self {
        Self {
            appointments: state.appointments.clone(),
            clock: state.clock.clone(),
            transitions: state.write_lock.clone(),
        }
    }

    /// Start a confirmed consultation: status to in-progress, actual
    /// start stamped from the injected clock. Rejected with a typed
    /// error when the appointment is not confirmed or the doctor already
    /// has a consultation running today.
    pub async fn start_consultation(&self, id: Uuid) -> Result<Appointment, QueueError> {
        let _guard = self.transitions.lock().await;
        let now = self.clock.now();

        let all = self.appointments.list_all().await?;
        let target = all
            .iter()
            .find(|appointment| appointment.id == id)
            .ok_or(QueueError::AppointmentNotFound(id))?;

        if target.status != AppointmentStatus::Confirmed {
            return Err(QueueError::NotConfirmed(target.status));
        }

        let today = CalendarDate::new(now.date_naive());
        let doctor_busy = all.iter().any(|appointment| {
            appointment.doctor_email == target.doctor_email
                && appointment.is_on(&today)
                && appointment.status == AppointmentStatus::InProgress
        });
        if doctor_busy {
            debug!(
                "Rejected start of {}: {} already has a consultation in progress",
                id, target.doctor_email
            );
            return Err(QueueError::ConsultationInProgress);
        }

        self.appointments
            .update_by_id(
                id,
                AppointmentUpdate {
                    status: Some(AppointmentStatus::InProgress),
                    actual_start_time: Some(now),
                    ..Default::default()
                },
            )
            .await?;

        info!("Started consultation {} at {}", id, now);
        self.appointments
            .get_by_id(id)
            .await?
            .ok_or(QueueError::AppointmentNotFound(id))
    }

    /// End the doctor's current consultation and chain the queue forward:
    /// the earliest remaining confirmed appointment of the day, if any,
    /// is started immediately. With no remaining appointment the queue
    /// goes idle.
    pub async fn end_consultation(
        &self,
        doctor_email: &str,
    ) -> Result<EndConsultationOutcome, QueueError> {
        let _guard = self.transitions.lock().await;
        let now = self.clock.now();
        let today = CalendarDate::new(now.date_naive());

        let all = self.appointments.list_all().await?;
        let current = all
            .iter()
            .find(|appointment| {
                appointment.doctor_email == doctor_email
                    && appointment.is_on(&today)
                    && appointment.status == AppointmentStatus::InProgress
            })
            .ok_or(QueueError::NoConsultationInProgress)?;

        self.appointments
            .update_by_id(
                current.id,
                AppointmentUpdate {
                    status: Some(AppointmentStatus::Completed),
                    actual_end_time: Some(now),
                    ..Default::default()
                },
            )
            .await?;
        info!("Completed consultation {} at {}", current.id, now);

        let next = all
            .iter()
            .filter(|appointment| {
                appointment.doctor_email == doctor_email
                    && appointment.is_on(&today)
                    && appointment.status == AppointmentStatus::Confirmed
                    && !appointment.has_started()
            })
            .min_by_key(|appointment| time_sort_key(&appointment.time));

        let next = match next {
            Some(upcoming) => {
                self.appointments
                    .update_by_id(
                        upcoming.id,
                        AppointmentUpdate {
                            status: Some(AppointmentStatus::InProgress),
                            actual_start_time: Some(now),
                            ..Default::default()
                        },
                    )
                    .await?;
                info!("Auto-advanced queue to consultation {}", upcoming.id);
                self.appointments.get_by_id(upcoming.id).await?
            }
            None => {
                debug!("Queue idle for {}: no remaining confirmed appointment", doctor_email);
                None
            }
        };

        let completed = self
            .appointments
            .get_by_id(current.id)
            .await?
            .ok_or(QueueError::AppointmentNotFound(current.id))?;

        Ok(EndConsultationOutcome { completed, next })
    }
}
