//! Arithmetic over "HH:MM" time-of-day strings.
//!
//! The whole engine exchanges times of day as "HH:MM" strings; these
//! helpers are the single place that does math on them.

/// Length of one bookable slot.
pub const SLOT_DURATION_MINUTES: i64 = 15;

/// How long before their slot a patient counts as "in the waiting room".
pub const WAITING_ROOM_LEAD_MINUTES: i64 = 15;

/// Add `minutes` to an "HH:MM" time, wrapping past midnight.
///
/// Minutes beyond one day wrap silently onto the next day's clock face;
/// callers only ever add small offsets within a single working session.
pub fn add_minutes(time: &str, minutes: i64) -> String {
    let (hours, mins) = parse_hhmm(time).unwrap_or((0, 0));
    let total = (hours * 60 + mins + minutes).rem_euclid(24 * 60);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Sort key for ordering "HH:MM" times within a day: strip the colon and
/// read the digits as one integer ("09:00" -> 900). This is the ordering
/// every within-day sort in the engine relies on.
pub fn time_sort_key(time: &str) -> i64 {
    time.replace(':', "").parse().unwrap_or(0)
}

/// Minutes since midnight for an "HH:MM" string, or `None` if malformed.
pub fn minutes_of_day(time: &str) -> Option<i64> {
    parse_hhmm(time).map(|(hours, mins)| hours * 60 + mins)
}

/// Minute-of-hour component of an "HH:MM" string (0 when malformed).
pub fn minute_of_hour(time: &str) -> i64 {
    parse_hhmm(time).map(|(_, mins)| mins).unwrap_or(0)
}

fn parse_hhmm(time: &str) -> Option<(i64, i64)> {
    let (hours, mins) = time.split_once(':')?;
    Some((hours.parse().ok()?, mins.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_within_the_hour() {
        assert_eq!(add_minutes("09:00", 15), "09:15");
        assert_eq!(add_minutes("09:45", 15), "10:00");
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(add_minutes("23:50", 20), "00:10");
        assert_eq!(add_minutes("00:10", -20), "23:50");
    }

    #[test]
    fn sort_key_strips_the_colon() {
        assert_eq!(time_sort_key("09:00"), 900);
        assert_eq!(time_sort_key("14:30"), 1430);
        assert!(time_sort_key("09:45") < time_sort_key("10:00"));
    }

    #[test]
    fn malformed_times_are_zero() {
        assert_eq!(time_sort_key("bogus"), 0);
        assert_eq!(add_minutes("bogus", 30), "00:30");
        assert_eq!(minutes_of_day("bogus"), None);
    }
}
