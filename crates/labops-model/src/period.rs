//! Query periods and mirrored previous-period derivation.
//!
//! Every dashboard query runs over a date range. Trend figures compare
//! it against the previous period: a range of identical day count ending
//! exactly one day before the current range starts.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Create a period, rejecting ranges whose end precedes their start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(ModelError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single-day period.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Number of days in the range, inclusive of both bounds.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The mirrored previous period: same day count, ending one day
    /// before this period starts.
    pub fn previous(&self) -> Self {
        let end = self.start - Days::new(1);
        let start = end - Days::new((self.day_count() - 1) as u64);
        Self { start, end }
    }

    /// Resolve a named period relative to `today`.
    pub fn named(kind: NamedPeriod, today: NaiveDate) -> Self {
        match kind {
            NamedPeriod::Today => Self::single_day(today),
            NamedPeriod::Yesterday => Self::single_day(today - Days::new(1)),
            NamedPeriod::ThisWeek => {
                let weekday = today.weekday().num_days_from_monday() as u64;
                Self {
                    start: today - Days::new(weekday),
                    end: today,
                }
            }
            NamedPeriod::ThisMonth => Self {
                start: today.with_day(1).unwrap_or(today),
                end: today,
            },
            NamedPeriod::LastMonth => {
                let first_of_this_month = today.with_day(1).unwrap_or(today);
                let end = first_of_this_month - Days::new(1);
                let start = end.with_day(1).unwrap_or(end);
                Self { start, end }
            }
            NamedPeriod::ThisYear => Self {
                start: today.with_ordinal(1).unwrap_or(today),
                end: today,
            },
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Named ranges offered by the dashboard's period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamedPeriod {
    Today,
    Yesterday,
    ThisWeek,
    #[default]
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl NamedPeriod {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This week",
            Self::ThisMonth => "This month",
            Self::LastMonth => "Last month",
            Self::ThisYear => "This year",
        }
    }
}

/// A current period together with its mirrored previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPair {
    pub current: Period,
    pub previous: Period,
}

impl PeriodPair {
    /// Build the pair for a current period.
    pub fn from_current(current: Period) -> Self {
        Self {
            current,
            previous: current.previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        let error = Period::new(date(2025, 3, 10), date(2025, 3, 1)).unwrap_err();
        assert!(matches!(error, ModelError::InvalidPeriod { .. }));
    }

    #[test]
    fn previous_period_mirrors_length_and_abuts_start() {
        let current = Period::new(date(2025, 3, 1), date(2025, 3, 10)).unwrap();
        let previous = current.previous();
        assert_eq!(previous.start, date(2025, 2, 19));
        assert_eq!(previous.end, date(2025, 2, 28));
        assert_eq!(previous.day_count(), current.day_count());
    }

    #[test]
    fn named_periods_resolve_against_reference_date() {
        let today = date(2025, 3, 18); // a Tuesday
        assert_eq!(
            Period::named(NamedPeriod::Today, today),
            Period::single_day(today)
        );
        assert_eq!(
            Period::named(NamedPeriod::ThisWeek, today),
            Period::new(date(2025, 3, 17), today).unwrap()
        );
        assert_eq!(
            Period::named(NamedPeriod::ThisMonth, today),
            Period::new(date(2025, 3, 1), today).unwrap()
        );
        assert_eq!(
            Period::named(NamedPeriod::LastMonth, today),
            Period::new(date(2025, 2, 1), date(2025, 2, 28)).unwrap()
        );
        assert_eq!(
            Period::named(NamedPeriod::ThisYear, today),
            Period::new(date(2025, 1, 1), today).unwrap()
        );
    }
}
