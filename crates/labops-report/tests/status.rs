//! Tests for progress/status classification.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use labops_model::TestRecord;
use labops_report::{RecordStatus, classify, classify_record};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn past_completion_is_completed_regardless_of_expected() {
    let status = classify(Some(now() + Duration::hours(4)), Some(now() - Duration::hours(1)), now());
    assert_eq!(status, RecordStatus::Completed);
}

#[test]
fn five_minutes_out_is_urgent_with_label() {
    let status = classify(Some(now() + Duration::minutes(5)), None, now());
    assert_eq!(status, RecordStatus::Urgent { minutes: 5 });
    assert_eq!(status.to_string(), "5 min(s) remaining");
}

#[test]
fn no_usable_timestamps_is_no_eta() {
    assert_eq!(classify(None, None, now()), RecordStatus::NoEta);
    assert_eq!(
        classify_record(&TestRecord::default(), now()),
        RecordStatus::NoEta
    );
}

#[test]
fn eleven_minutes_out_is_plain_remaining() {
    let status = classify(Some(now() + Duration::minutes(11)), None, now());
    assert_eq!(
        status,
        RecordStatus::Remaining {
            days: 0,
            hours: 0,
            minutes: 11
        }
    );
    assert_eq!(status.to_string(), "11 min(s) remaining");
}

#[test]
fn exactly_expected_time_is_delayed() {
    assert_eq!(classify(Some(now()), None, now()), RecordStatus::Delayed);
}

#[test]
fn class_labels_bucket_pending_states() {
    assert_eq!(RecordStatus::DueNow.class_label(), "Pending");
    assert_eq!(RecordStatus::Urgent { minutes: 3 }.class_label(), "Pending");
    assert_eq!(RecordStatus::Completed.class_label(), "Completed");
    assert_eq!(RecordStatus::NoEta.class_label(), "No ETA");
    assert!(RecordStatus::DueNow.is_pending());
    assert!(!RecordStatus::Delayed.is_pending());
}

#[test]
fn record_fields_parse_into_classification() {
    let record = TestRecord {
        time_expected: Some("2025-03-05T11:00:00".to_string()),
        time_completed: Some("2025-03-05T10:45:00".to_string()),
        ..TestRecord::default()
    };
    assert_eq!(classify_record(&record, now()), RecordStatus::Completed);
}
