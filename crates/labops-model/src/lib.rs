pub mod criteria;
pub mod delay;
pub mod error;
pub mod metric;
pub mod period;
pub mod record;
pub mod units;

pub use criteria::{FilterCriteria, UnitCategoryFilter, UnitFilter};
pub use delay::DelayStatus;
pub use error::{ModelError, Result};
pub use metric::{MetricKind, Polarity};
pub use period::{NamedPeriod, Period, PeriodPair};
pub use record::TestRecord;
pub use units::{ANNEX_UNITS, INPATIENT_UNITS, OUTPATIENT_UNITS, UnitCategory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes() {
        let record = TestRecord {
            lab_number: Some("LAB-0042".to_string()),
            test_name: Some("Full Blood Count".to_string()),
            date: Some("2025-03-05".to_string()),
            shift: Some("day".to_string()),
            hospital_unit: Some("ICU".to_string()),
            price: Some(1500.0),
            ..TestRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: TestRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn criteria_defaults_are_unconstrained() {
        assert!(FilterCriteria::default().is_unconstrained());
    }
}
