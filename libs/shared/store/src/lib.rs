pub mod memory;
pub mod state;
pub mod store;

pub use memory::{InMemoryAppointmentStore, InMemoryPlanningStore};
pub use state::AppState;
pub use store::{AppointmentStore, PlanningStore, StoreError};
