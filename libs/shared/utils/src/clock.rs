use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Source of "now" for every time-sensitive computation.
///
/// Nothing in the engine reads the system clock directly; services hold a
/// `Clock` so tests and the demo mode can drive time explicitly.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to an explicit instant plus an adjustable offset.
///
/// Used by the demo mode and by tests that need to walk a consultation
/// through its lifecycle without waiting in real time.
pub struct SimulatedClock {
    base: DateTime<Utc>,
    offset_minutes: Mutex<i64>,
}

impl SimulatedClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self {
            base,
            offset_minutes: Mutex::new(0),
        }
    }

    /// Wall clock shifted by a fixed number of minutes (demo mode).
    pub fn offset_from_wall_clock(offset_minutes: i64) -> OffsetClock {
        OffsetClock { offset_minutes }
    }

    pub fn advance_minutes(&self, minutes: i64) {
        let mut offset = self.offset_minutes.lock().unwrap();
        *offset += minutes;
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> DateTime<Utc> {
        let offset = *self.offset_minutes.lock().unwrap();
        self.base + Duration::minutes(offset)
    }
}

/// Wall clock plus a constant offset.
#[derive(Debug, Clone, Copy)]
pub struct OffsetClock {
    offset_minutes: i64,
}

impl Clock for OffsetClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now() + Duration::minutes(self.offset_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn simulated_clock_advances_on_demand() {
        let base = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let clock = SimulatedClock::new(base);

        assert_eq!(clock.now(), base);
        clock.advance_minutes(25);
        assert_eq!(clock.now(), base + Duration::minutes(25));
    }
}
