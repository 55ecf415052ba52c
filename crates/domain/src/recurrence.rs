use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// How often a meeting repeats. Stored on every occurrence of a series,
/// not just the anchor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    None,
    Weekly,
    Biweekly,
    Monthly,
}

impl Default for RecurrenceKind {
    fn default() -> Self {
        Self::None
    }
}

impl RecurrenceKind {
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::None)
    }

    fn step(&self, cursor: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::None => None,
            Self::Weekly => cursor.checked_add_signed(Duration::weeks(1)),
            Self::Biweekly => cursor.checked_add_signed(Duration::weeks(2)),
            // Calendar-month arithmetic clamps to the last day of shorter
            // months, and later steps continue from the clamped cursor.
            Self::Monthly => cursor.checked_add_months(Months::new(1)),
        }
    }
}

impl Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::None => "none",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        };
        write!(f, "{}", kind)
    }
}

#[derive(Error, Debug)]
pub enum InvalidRecurrenceKindError {
    #[error("Invalid recurrence kind specified: {0}")]
    Malformed(String),
}

impl FromStr for RecurrenceKind {
    type Err = InvalidRecurrenceKindError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "none" => Ok(Self::None),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(InvalidRecurrenceKindError::Malformed(kind.to_string())),
        }
    }
}

/// Timestamps of the follow-up occurrences after `start`, in order. The
/// anchor itself is not included, so a non-recurring kind yields nothing.
///
/// The bound is calendar-day inclusive: a follow-up landing on `until`,
/// even at a different time of day, still counts. Termination follows from
/// the step being strictly monotonic against the fixed bound.
pub fn expand_occurrences(
    start: DateTime<Utc>,
    kind: RecurrenceKind,
    until: NaiveDate,
) -> Vec<DateTime<Utc>> {
    let mut timestamps = Vec::new();
    let mut cursor = start;
    while let Some(next) = kind.step(cursor) {
        if next.date_naive() > until {
            break;
        }
        timestamps.push(next);
        cursor = next;
    }
    timestamps
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn none_kind_yields_no_occurrences() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        assert!(expand_occurrences(start, RecurrenceKind::None, date(2030, 1, 1)).is_empty());
    }

    #[test]
    fn weekly_expansion_includes_end_date() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let timestamps = expand_occurrences(start, RecurrenceKind::Weekly, date(2025, 1, 22));
        assert_eq!(
            timestamps,
            vec![
                Utc.with_ymd_and_hms(2025, 1, 8, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 1, 22, 9, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn weekly_expansion_stops_before_bound() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let timestamps = expand_occurrences(start, RecurrenceKind::Weekly, date(2025, 1, 7));
        assert!(timestamps.is_empty());
    }

    #[test]
    fn end_date_comparison_ignores_time_of_day() {
        // The anchor is late in the day, the bound is still day-inclusive.
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 23, 30, 0).unwrap();
        let timestamps = expand_occurrences(start, RecurrenceKind::Weekly, date(2025, 1, 8));
        assert_eq!(
            timestamps,
            vec![Utc.with_ymd_and_hms(2025, 1, 8, 23, 30, 0).unwrap()]
        );
    }

    #[test]
    fn biweekly_expansion_spaces_by_two_weeks() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let timestamps = expand_occurrences(start, RecurrenceKind::Biweekly, date(2025, 2, 12));
        assert_eq!(
            timestamps,
            vec![
                Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 1, 29, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 2, 12, 9, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn monthly_expansion_clamps_day_31_starts() {
        let start = Utc.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap();
        let timestamps = expand_occurrences(start, RecurrenceKind::Monthly, date(2025, 4, 30));
        assert_eq!(
            timestamps,
            vec![
                Utc.with_ymd_and_hms(2025, 2, 28, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 3, 28, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 4, 28, 9, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn monthly_expansion_keeps_day_of_month() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let timestamps = expand_occurrences(start, RecurrenceKind::Monthly, date(2025, 4, 15));
        assert_eq!(
            timestamps,
            vec![
                Utc.with_ymd_and_hms(2025, 2, 15, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn formats_and_parses_recurrence_kind() {
        assert_eq!(RecurrenceKind::Biweekly.to_string(), "biweekly");
        assert_eq!(
            "monthly".parse::<RecurrenceKind>().unwrap(),
            RecurrenceKind::Monthly
        );
        assert!("yearly".parse::<RecurrenceKind>().is_err());
    }
}
