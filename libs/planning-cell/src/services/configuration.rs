// libs/planning-cell/src/services/configuration.rs
use tracing::debug;

use shared_models::PlanningConfiguration;
use shared_store::{PlanningStore, StoreError};

/// Resolve a doctor's planning configuration, falling back to the
/// documented defaults. Absence is never an error.
pub async fn get_or_default(
    store: &dyn PlanningStore,
    doctor_email: &str,
) -> Result<PlanningConfiguration, StoreError> {
    match store.get_by_doctor(doctor_email).await? {
        Some(configuration) => Ok(configuration),
        None => {
            debug!("No planning configuration for {}, using defaults", doctor_email);
            Ok(PlanningConfiguration::default_for(doctor_email))
        }
    }
}

/// Persist a doctor's configuration as-is. Working-hour ranges are
/// validated on use, not on save.
pub async fn save_configuration(
    store: &dyn PlanningStore,
    configuration: PlanningConfiguration,
) -> Result<(), StoreError> {
    store.save(configuration).await
}
