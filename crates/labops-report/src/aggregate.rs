//! Grouping of filtered record arrays into count and revenue maps.
//!
//! Keys are derived from the records, never stored: day strings come from
//! the parsed timestamp, hours from the receipt time, names from the unit
//! and test fields. Records missing a usable key for a grouping are
//! excluded from that grouping without error.

use std::collections::BTreeMap;

use labops_model::TestRecord;
use labops_transform::{day_key, record_hour, record_timestamp};

/// Record count per day (`YYYY-MM-DD`).
pub fn count_by_day(records: &[TestRecord]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(timestamp) = record_timestamp(record) {
            *counts.entry(day_key(timestamp)).or_insert(0) += 1;
        }
    }
    counts
}

/// Record count per receipt hour (0-23).
///
/// Out-of-range or unparseable hours increment no bucket.
pub fn count_by_hour(records: &[TestRecord]) -> BTreeMap<u32, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(hour) = record_hour(record) {
            *counts.entry(hour).or_insert(0) += 1;
        }
    }
    counts
}

/// Record count per hospital unit.
pub fn count_by_unit(records: &[TestRecord]) -> BTreeMap<String, u64> {
    count_by_field(records, |record| record.hospital_unit.as_deref())
}

/// Record count per test name.
pub fn count_by_test(records: &[TestRecord]) -> BTreeMap<String, u64> {
    count_by_field(records, |record| record.test_name.as_deref())
}

/// Revenue sum per day (`YYYY-MM-DD`).
pub fn revenue_by_day(records: &[TestRecord]) -> BTreeMap<String, f64> {
    let mut sums = BTreeMap::new();
    for record in records {
        if let Some(timestamp) = record_timestamp(record) {
            *sums.entry(day_key(timestamp)).or_insert(0.0) += record.price_or_zero();
        }
    }
    sums
}

/// Revenue sum per hospital unit.
pub fn revenue_by_unit(records: &[TestRecord]) -> BTreeMap<String, f64> {
    let mut sums = BTreeMap::new();
    for record in records {
        if let Some(unit) = non_empty(record.hospital_unit.as_deref()) {
            *sums.entry(unit.to_string()).or_insert(0.0) += record.price_or_zero();
        }
    }
    sums
}

/// Total revenue over the array; unparseable prices contribute 0.
pub fn total_revenue(records: &[TestRecord]) -> f64 {
    records.iter().map(TestRecord::price_or_zero).sum()
}

fn count_by_field<'a>(
    records: &'a [TestRecord],
    key: impl Fn(&'a TestRecord) -> Option<&'a str>,
) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(value) = non_empty(key(record)) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, unit: &str, price: Option<f64>) -> TestRecord {
        TestRecord {
            date: Some(date.to_string()),
            hospital_unit: Some(unit.to_string()),
            price,
            ..TestRecord::default()
        }
    }

    #[test]
    fn daily_counts_skip_undatable_records() {
        let records = vec![
            record("2025-03-05", "ICU", None),
            record("2025-03-05", "OPD", None),
            record("??", "ICU", None),
        ];
        let counts = count_by_day(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("2025-03-05"), Some(&2));
    }

    #[test]
    fn hourly_counts_ignore_out_of_range_hours() {
        let records = vec![
            TestRecord {
                time_in: Some("2025-03-05T09:10:00".to_string()),
                ..TestRecord::default()
            },
            TestRecord {
                time_in: Some("24:00".to_string()),
                ..TestRecord::default()
            },
            TestRecord {
                time_in: Some("-1:00".to_string()),
                ..TestRecord::default()
            },
            TestRecord::default(),
        ];
        let counts = count_by_hour(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&9), Some(&1));
        assert_eq!(counts.values().sum::<u64>(), 1);
    }

    #[test]
    fn revenue_sums_default_missing_prices_to_zero() {
        let records = vec![
            record("2025-03-05", "ICU", Some(1000.0)),
            record("2025-03-05", "ICU", None),
            record("2025-03-05", "OPD", Some(250.5)),
        ];
        let by_unit = revenue_by_unit(&records);
        assert_eq!(by_unit.get("ICU"), Some(&1000.0));
        assert_eq!(by_unit.get("OPD"), Some(&250.5));
        assert_eq!(total_revenue(&records), 1250.5);
    }

    #[test]
    fn blank_field_values_are_not_keys() {
        let records = vec![record("2025-03-05", "  ", None)];
        assert!(count_by_unit(&records).is_empty());
    }
}
