pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::PlanningError;
pub use models::*;
pub use router::planning_routes;
pub use services::*;
