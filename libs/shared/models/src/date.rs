// libs/shared/models/src/date.rs
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names as they appear in the display format, capitalized.
const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// A structured calendar day (no time component).
///
/// Internally everything is a `NaiveDate`; the locale display string
/// `"<day> <Month> <year>"` (e.g. `"15 Janvier 2025"`) exists only at the
/// boundary, where day filtering relies on exact string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse the boundary display format, tolerating lowercase month names.
    pub fn parse_display(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let day: u32 = parts.next()?.parse().ok()?;
        let month_name = parts.next()?;
        let year: i32 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        let month = MONTH_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(month_name) || *name == month_name)?
            as u32
            + 1;

        Self::from_ymd(year, month, day)
    }

    /// The boundary display string, e.g. `"5 Janvier 2025"` (no zero pad).
    pub fn display(&self) -> String {
        let month = MONTH_NAMES[self.0.month0() as usize];
        format!("{} {} {}", self.0.day(), month, self.0.year())
    }

    /// Weekday index with 0 = Sunday .. 6 = Saturday.
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_boundary_format() {
        let date = CalendarDate::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(date.display(), "15 Janvier 2025");

        let single_digit = CalendarDate::from_ymd(2025, 8, 5).unwrap();
        assert_eq!(single_digit.display(), "5 Août 2025");
    }

    #[test]
    fn display_round_trips_for_every_month() {
        for month in 1..=12 {
            let date = CalendarDate::from_ymd(2025, month, 21).unwrap();
            let parsed = CalendarDate::parse_display(&date.display()).unwrap();
            assert_eq!(parsed, date);
        }
    }

    #[test]
    fn parse_tolerates_lowercase_months() {
        assert_eq!(
            CalendarDate::parse_display("15 janvier 2025"),
            CalendarDate::from_ymd(2025, 1, 15)
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(CalendarDate::parse_display("2025-01-15"), None);
        assert_eq!(CalendarDate::parse_display("15 Brumaire 2025"), None);
        assert_eq!(CalendarDate::parse_display("15 Janvier 2025 extra"), None);
    }

    #[test]
    fn weekday_index_starts_at_sunday() {
        // 2025-01-15 is a Wednesday.
        let date = CalendarDate::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(date.weekday_index(), 3);
        // 2025-01-19 is a Sunday.
        let sunday = CalendarDate::from_ymd(2025, 1, 19).unwrap();
        assert_eq!(sunday.weekday_index(), 0);
    }
}
