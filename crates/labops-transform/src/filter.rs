//! Predicate-chain filtering of record arrays.
//!
//! Each criteria dimension is one predicate; a record survives when every
//! predicate accepts it. Filtering never errors: the worst outcome is an
//! empty result.

use chrono::NaiveDateTime;
use tracing::debug;

use labops_model::{FilterCriteria, TestRecord};

use crate::datetime::{end_of_day, record_timestamp};

/// Apply `criteria` to `records`, returning the surviving subset.
///
/// Records with unparseable dates are kept when no date constraint
/// applies and dropped otherwise.
pub fn apply_filters(records: &[TestRecord], criteria: &FilterCriteria) -> Vec<TestRecord> {
    let selected: Vec<TestRecord> = records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect();
    debug!(
        input = records.len(),
        selected = selected.len(),
        "filter applied"
    );
    selected
}

/// Whether a single record satisfies every criteria dimension.
pub fn matches(record: &TestRecord, criteria: &FilterCriteria) -> bool {
    matches_date(record, criteria)
        && matches_shift(record, criteria)
        && criteria.hospital_unit.matches(record.hospital_unit.as_deref())
        && matches_section(record, criteria)
}

fn matches_date(record: &TestRecord, criteria: &FilterCriteria) -> bool {
    if criteria.start_date.is_none() && criteria.end_date.is_none() {
        return true;
    }
    let Some(timestamp) = record_timestamp(record) else {
        // Date-constrained query; an undatable record cannot qualify.
        return false;
    };
    within_bounds(timestamp, criteria)
}

fn within_bounds(timestamp: NaiveDateTime, criteria: &FilterCriteria) -> bool {
    if let Some(start) = criteria.start_date
        && timestamp.date() < start
    {
        return false;
    }
    if let Some(end) = criteria.end_date
        && timestamp > end_of_day(end)
    {
        return false;
    }
    true
}

fn matches_shift(record: &TestRecord, criteria: &FilterCriteria) -> bool {
    let Some(expected) = criteria.shift.as_deref() else {
        return true;
    };
    record
        .shift
        .as_deref()
        .is_some_and(|shift| shift.trim().eq_ignore_ascii_case(expected))
}

fn matches_section(record: &TestRecord, criteria: &FilterCriteria) -> bool {
    let Some(expected) = criteria.lab_section.as_deref() else {
        return true;
    };
    record
        .lab_section
        .as_deref()
        .is_some_and(|section| section.trim().eq_ignore_ascii_case(expected))
}
