pub mod appointment;
pub mod date;
pub mod error;
pub mod planning;

pub use appointment::*;
pub use date::CalendarDate;
pub use error::AppError;
pub use planning::*;
