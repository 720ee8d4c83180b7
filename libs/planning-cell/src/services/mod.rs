pub mod booking;
pub mod configuration;
pub mod slots;

pub use booking::book_appointment;
pub use configuration::{get_or_default, save_configuration};
pub use slots::{available_slots_for_type, can_place, generate_slots};
