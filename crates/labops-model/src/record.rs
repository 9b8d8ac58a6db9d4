//! Test record as delivered by the LIMS records endpoint.
//!
//! The feed is a JSON array of flat objects. Field names are inconsistent
//! across pages (some capitalized, some snake_case), prices arrive as
//! numbers or numeric strings, and every field can be absent. Parsing is
//! therefore lenient: a record never fails to deserialize because one of
//! its fields is malformed.

use serde::{Deserialize, Deserializer, Serialize};

/// A single laboratory test record.
///
/// Identity is the natural key (lab number + test name); nothing beyond
/// that is enforced at this layer. Date/time fields stay as raw strings
/// here and are normalized downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Laboratory accession number.
    #[serde(default, alias = "Lab_Number", alias = "lab_no")]
    pub lab_number: Option<String>,

    /// Name of the ordered test.
    #[serde(default, alias = "Test_Name", alias = "test")]
    pub test_name: Option<String>,

    /// Collection date, `YYYY-MM-DD` or a full ISO-ish timestamp.
    #[serde(default, alias = "Date")]
    pub date: Option<String>,

    /// Sample receipt time, usually `YYYY-MM-DDTHH:mm:ss`.
    #[serde(default, alias = "Time_In", alias = "time_received")]
    pub time_in: Option<String>,

    /// Work shift the sample was received on.
    #[serde(default, alias = "Shift")]
    pub shift: Option<String>,

    /// Requesting hospital unit.
    #[serde(default, alias = "Hospital_Unit", alias = "unit")]
    pub hospital_unit: Option<String>,

    /// Lab section performing the test.
    #[serde(default, alias = "Lab_Section", alias = "section")]
    pub lab_section: Option<String>,

    /// Billed price; number or numeric string in the feed.
    #[serde(default, alias = "Price", deserialize_with = "lenient_price")]
    pub price: Option<f64>,

    /// Delay status label assigned by the LIMS.
    #[serde(default, alias = "Delay_Status")]
    pub delay_status: Option<String>,

    /// Expected completion timestamp.
    #[serde(default, alias = "Time_Expected", alias = "expected_time")]
    pub time_expected: Option<String>,

    /// Actual completion timestamp.
    #[serde(default, alias = "Time_Completed", alias = "completed_time")]
    pub time_completed: Option<String>,
}

impl TestRecord {
    /// Billed price, defaulting to 0 when absent or unparseable.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Accepts a JSON number, a numeric string, or anything else (as `None`).
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_f64(&value))
}

/// Parses a JSON value as f64, returning None for non-numeric input.
pub fn lenient_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_capitalized_feed_keys() {
        let json = r#"{"date":"2025-03-05","Shift":"day","Hospital_Unit":"ICU"}"#;
        let record: TestRecord = serde_json::from_str(json).expect("deserialize record");
        assert_eq!(record.date.as_deref(), Some("2025-03-05"));
        assert_eq!(record.shift.as_deref(), Some("day"));
        assert_eq!(record.hospital_unit.as_deref(), Some("ICU"));
        assert_eq!(record.price, None);
    }

    #[test]
    fn price_accepts_number_and_numeric_string() {
        let record: TestRecord =
            serde_json::from_str(r#"{"price": 1500.5}"#).expect("numeric price");
        assert_eq!(record.price, Some(1500.5));

        let record: TestRecord =
            serde_json::from_str(r#"{"price": " 200 "}"#).expect("string price");
        assert_eq!(record.price, Some(200.0));
    }

    #[test]
    fn malformed_price_becomes_none() {
        let record: TestRecord =
            serde_json::from_str(r#"{"price": "free"}"#).expect("junk price");
        assert_eq!(record.price, None);
        assert_eq!(record.price_or_zero(), 0.0);

        let record: TestRecord =
            serde_json::from_str(r#"{"price": null}"#).expect("null price");
        assert_eq!(record.price_or_zero(), 0.0);
    }
}
