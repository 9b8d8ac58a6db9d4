//! Per-record progress classification for the tracker and progress views.
//!
//! A pure function of two timestamps and the supplied wall-clock time; no
//! stored state, recomputed on every render.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

use labops_model::TestRecord;
use labops_transform::parse_datetime;

/// Minutes remaining at or under which a pending record is urgent.
const URGENT_THRESHOLD_MINUTES: i64 = 10;

/// Progress state of a single record relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// A valid completion timestamp at or before now.
    Completed,
    /// Expected time has passed without a completion.
    Delayed,
    /// Expected within the current minute.
    DueNow,
    /// Ten minutes or less remaining.
    Urgent { minutes: i64 },
    /// More than ten minutes remaining.
    Remaining { days: i64, hours: i64, minutes: i64 },
    /// No usable expected time.
    NoEta,
}

impl RecordStatus {
    /// Coarse class used for tracker summary counts.
    #[must_use]
    pub const fn class_label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Delayed => "Delayed",
            Self::DueNow | Self::Urgent { .. } | Self::Remaining { .. } => "Pending",
            Self::NoEta => "No ETA",
        }
    }

    /// Whether the record still needs attention before its deadline.
    pub const fn is_pending(&self) -> bool {
        matches!(
            self,
            Self::DueNow | Self::Urgent { .. } | Self::Remaining { .. }
        )
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Delayed => write!(f, "Delayed"),
            Self::DueNow => write!(f, "Due now"),
            Self::Urgent { minutes } => write!(f, "{minutes} min(s) remaining"),
            Self::Remaining {
                days,
                hours,
                minutes,
            } => {
                if *days > 0 {
                    write!(f, "{days} day(s) {hours} hr(s) remaining")
                } else if *hours > 0 {
                    write!(f, "{hours} hr(s) {minutes} min(s) remaining")
                } else {
                    write!(f, "{minutes} min(s) remaining")
                }
            }
            Self::NoEta => write!(f, "No ETA"),
        }
    }
}

/// Classify a record from its expected and completed timestamps.
///
/// A completion in the future counts as not yet completed; the record is
/// then judged on its expected time alone.
pub fn classify(
    expected: Option<NaiveDateTime>,
    completed: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> RecordStatus {
    if let Some(done) = completed
        && done <= now
    {
        return RecordStatus::Completed;
    }
    let Some(eta) = expected else {
        return RecordStatus::NoEta;
    };
    if eta <= now {
        return RecordStatus::Delayed;
    }

    let remaining = eta - now;
    let total_minutes = remaining.num_minutes();
    if total_minutes == 0 {
        return RecordStatus::DueNow;
    }
    if total_minutes <= URGENT_THRESHOLD_MINUTES {
        return RecordStatus::Urgent {
            minutes: total_minutes,
        };
    }
    let days = remaining.num_days();
    let hours = (remaining - Duration::days(days)).num_hours();
    let minutes = (remaining - Duration::days(days) - Duration::hours(hours)).num_minutes();
    RecordStatus::Remaining {
        days,
        hours,
        minutes,
    }
}

/// Classify a record by parsing its timestamp fields.
pub fn classify_record(record: &TestRecord, now: NaiveDateTime) -> RecordStatus {
    let expected = record.time_expected.as_deref().and_then(parse_datetime);
    let completed = record.time_completed.as_deref().and_then(parse_datetime);
    classify(expected, completed, now)
}
