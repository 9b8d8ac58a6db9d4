//! Tests for datetime normalization.

use chrono::{NaiveDate, NaiveDateTime};
use labops_model::TestRecord;
use labops_transform::{hour_of_day, parse_date, parse_datetime, record_hour, record_timestamp};

#[test]
fn parse_date_complete() {
    assert_eq!(
        parse_date("2025-03-05"),
        NaiveDate::from_ymd_opt(2025, 3, 5)
    );
}

#[test]
fn parse_date_invalid_returns_none() {
    assert!(parse_date("").is_none());
    assert!(parse_date("invalid").is_none());
    assert!(parse_date("2025-13-01").is_none()); // Invalid month
}

#[test]
fn parse_datetime_accepts_timestamp_and_date() {
    let with_time: NaiveDateTime = parse_datetime("2025-03-05T14:30:00").unwrap();
    assert_eq!(with_time.time().to_string(), "14:30:00");

    let midnight = parse_datetime("2025-03-05").unwrap();
    assert_eq!(midnight.time().to_string(), "00:00:00");
}

#[test]
fn format_list_order_prefers_iso() {
    // 03/05 in day-first order: 3 May, not March 5.
    assert_eq!(
        parse_date("03/05/2025"),
        NaiveDate::from_ymd_opt(2025, 5, 3)
    );
}

#[test]
fn record_timestamp_prefers_time_in() {
    let record = TestRecord {
        date: Some("2025-03-05".to_string()),
        time_in: Some("2025-03-05T09:45:00".to_string()),
        ..TestRecord::default()
    };
    let timestamp = record_timestamp(&record).unwrap();
    assert_eq!(timestamp.time().to_string(), "09:45:00");
}

#[test]
fn record_timestamp_falls_back_to_date() {
    let record = TestRecord {
        date: Some("2025-03-05".to_string()),
        time_in: Some("??".to_string()),
        ..TestRecord::default()
    };
    let timestamp = record_timestamp(&record).unwrap();
    assert_eq!(timestamp.date(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
}

#[test]
fn record_without_usable_fields_has_no_timestamp() {
    assert!(record_timestamp(&TestRecord::default()).is_none());
}

#[test]
fn hour_extraction_bounds() {
    assert_eq!(hour_of_day("00:05"), Some(0));
    assert_eq!(hour_of_day("23:59"), Some(23));
    assert_eq!(hour_of_day("24:00"), None);
}

#[test]
fn record_hour_uses_time_in_then_date() {
    let record = TestRecord {
        date: Some("2025-03-05T11:00:00".to_string()),
        time_in: Some("2025-03-05T08:30:00".to_string()),
        ..TestRecord::default()
    };
    assert_eq!(record_hour(&record), Some(8));

    let date_only = TestRecord {
        date: Some("2025-03-05T11:00:00".to_string()),
        ..TestRecord::default()
    };
    assert_eq!(record_hour(&date_only), Some(11));
}
