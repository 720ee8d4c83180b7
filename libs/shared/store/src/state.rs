// libs/shared/store/src/state.rs
use std::sync::Arc;

use tokio::sync::Mutex;

use shared_config::AppConfig;
use shared_models::{default_catalog, AppointmentType};
use shared_utils::clock::{Clock, SimulatedClock, SystemClock};

use crate::memory::{InMemoryAppointmentStore, InMemoryPlanningStore};
use crate::store::{AppointmentStore, PlanningStore};

/// Shared state threaded through every cell router.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub appointments: Arc<dyn AppointmentStore>,
    pub planning: Arc<dyn PlanningStore>,
    pub clock: Arc<dyn Clock>,
    pub catalog: Vec<AppointmentType>,
    /// Serializes every check-then-write on the appointment store:
    /// bookings and queue transitions both run under this lock, so two
    /// concurrent starts cannot both succeed and two concurrent bookings
    /// cannot share a slot.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// In-memory state with the clock the configuration asks for (wall
    /// clock, or offset demo clock).
    pub fn from_config(config: AppConfig) -> Self {
        let clock: Arc<dyn Clock> = match config.demo_clock_offset_minutes {
            Some(offset) => Arc::new(SimulatedClock::offset_from_wall_clock(offset)),
            None => Arc::new(SystemClock),
        };

        Self {
            config,
            appointments: Arc::new(InMemoryAppointmentStore::new()),
            planning: Arc::new(InMemoryPlanningStore::new()),
            clock,
            catalog: default_catalog(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Test state pinned to an explicit clock and pre-seeded appointments.
    pub fn for_tests(
        appointments: Arc<dyn AppointmentStore>,
        planning: Arc<dyn PlanningStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config: AppConfig {
                bind_port: 0,
                demo_clock_offset_minutes: None,
            },
            appointments,
            planning,
            clock,
            catalog: default_catalog(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
