pub mod delay;
pub mod queue;
pub mod statistics;
pub mod waiting;

pub use delay::estimate_delay;
pub use queue::QueueService;
pub use statistics::day_statistics;
pub use waiting::{format_elapsed, next_appointment, waiting_room_members};
