pub mod clock;
pub mod time;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use time::{
    add_minutes, minute_of_hour, minutes_of_day, time_sort_key, SLOT_DURATION_MINUTES,
    WAITING_ROOM_LEAD_MINUTES,
};
