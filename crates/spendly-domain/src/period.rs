//! Rolling reporting periods anchored at a reference instant.

use std::fmt;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// A rolling window ending at "now" used to scope dashboard aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" | "w" | "weekly" => Some(Period::Week),
            "month" | "m" | "monthly" => Some(Period::Month),
            "year" | "y" | "yearly" => Some(Period::Year),
            _ => None,
        }
    }

    /// Inclusive lower bound of the window ending at `now`.
    ///
    /// Calendar arithmetic clamps to the last valid day (Mar 31 minus one
    /// month is Feb 28/29). If the subtraction overflows the window collapses to `now`.
    pub fn window_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Period::Week => now.checked_sub_signed(Duration::days(7)).unwrap_or(now),
            Period::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
            Period::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
        }
    }

    /// `strftime` pattern for chart bucket labels at this granularity.
    pub fn bucket_format(self) -> &'static str {
        match self {
            Period::Week => "%a",
            Period::Month => "%-d %b",
            Period::Year => "%b",
        }
    }

    pub fn bucket_label(self, date: DateTime<Utc>) -> String {
        date.format(self.bucket_format()).to_string()
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn window_starts_follow_calendar_arithmetic() {
        let now = at("2026-03-31T12:00:00Z");
        assert_eq!(Period::Week.window_start(now), at("2026-03-24T12:00:00Z"));
        assert_eq!(Period::Month.window_start(now), at("2026-02-28T12:00:00Z"));
        assert_eq!(Period::Year.window_start(now), at("2025-03-31T12:00:00Z"));
    }

    #[test]
    fn window_starts_nest() {
        let now = at("2026-10-18T08:30:00Z");
        let week = Period::Week.window_start(now);
        let month = Period::Month.window_start(now);
        let year = Period::Year.window_start(now);
        assert!(year <= month && month <= week);
    }

    #[test]
    fn bucket_labels_depend_on_granularity() {
        let date = at("2026-01-05T10:00:00Z");
        assert_eq!(Period::Week.bucket_label(date), "Mon");
        assert_eq!(Period::Month.bucket_label(date), "5 Jan");
        assert_eq!(Period::Year.bucket_label(date), "Jan");
    }

    #[test]
    fn parses_period_names() {
        assert_eq!(Period::from_str("Week"), Some(Period::Week));
        assert_eq!(Period::from_str("y"), Some(Period::Year));
        assert_eq!(Period::from_str("decade"), None);
    }
}
