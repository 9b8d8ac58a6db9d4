//! Date/time normalization for LIMS record fields.
//!
//! Incoming `date`/`time_in` fields are ISO-ish strings, but the portal
//! export is not consistent: some pages emit bare dates, others full
//! timestamps, a few legacy screens emit day-first forms. Each parser
//! tries a fixed list of formats in order; the first structural match
//! wins. Invalid or missing input yields `None`, never an error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use labops_model::TestRecord;

/// Datetime formats accepted for timestamp fields, in match order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M",
];

/// Date-only formats accepted for the `date` field, in match order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d-%b-%Y",
];

/// Parse a timestamp string to a `NaiveDateTime`.
///
/// Date-only input parses to midnight. A trailing `Z` or numeric UTC
/// offset is stripped rather than converted; the portal reports local
/// wall-clock time throughout.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = strip_offset(value.trim());
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    parse_date(trimmed).map(|date| date.and_time(NaiveTime::MIN))
}

/// Parse a date string to a `NaiveDate`.
///
/// Timestamp input is accepted and truncated to its date component.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = strip_offset(value.trim());
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed.date());
        }
    }
    None
}

/// Hour of day (0-23) from a time or timestamp string.
///
/// Out-of-range or unparseable hours yield `None`.
pub fn hour_of_day(value: &str) -> Option<u32> {
    let trimmed = strip_offset(value.trim());
    if let Some(parsed) = parse_datetime(trimmed) {
        // Midnight from a date-only string is not a real receipt hour.
        if trimmed.contains(':') {
            return Some(parsed.hour());
        }
        return None;
    }
    // Bare "HH:MM" or "HH:MM:SS" time substring.
    let (hour_part, _) = trimmed.split_once(':')?;
    let hour: u32 = hour_part.trim().parse().ok()?;
    (hour <= 23).then_some(hour)
}

/// Last second of the given day, for inclusive upper bounds.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Day key (`YYYY-MM-DD`) used by date-grouped aggregates.
pub fn day_key(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Best-available timestamp for a record: `time_in` when present and
/// parseable, else the `date` field at midnight.
pub fn record_timestamp(record: &TestRecord) -> Option<NaiveDateTime> {
    if let Some(time_in) = record.time_in.as_deref()
        && let Some(parsed) = parse_datetime(time_in)
    {
        return Some(parsed);
    }
    record.date.as_deref().and_then(parse_datetime)
}

/// Receipt hour for a record, preferring `time_in` over `date`.
pub fn record_hour(record: &TestRecord) -> Option<u32> {
    if let Some(time_in) = record.time_in.as_deref()
        && let Some(hour) = hour_of_day(time_in)
    {
        return Some(hour);
    }
    record.date.as_deref().and_then(hour_of_day)
}

/// Strips a trailing `Z` or `+HH:MM`/`-HH:MM` UTC offset from a
/// timestamp string, leaving date-only values untouched.
fn strip_offset(value: &str) -> &str {
    if let Some(stripped) = value.strip_suffix('Z') {
        return stripped;
    }
    // An offset can only follow a time component.
    if let Some(t_index) = value.find('T')
        && let Some(sign_index) = value[t_index..]
            .rfind(['+', '-'])
            .map(|offset| t_index + offset)
        && sign_index > t_index
    {
        return &value[..sign_index];
    }
    value
}
