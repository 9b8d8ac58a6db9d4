//! Dashboard metric kinds and their trend polarity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an increase in a metric is an improvement or a regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Polarity {
    /// Larger values are better (revenue, test counts, on-time results).
    #[default]
    HigherIsBetter,
    /// Smaller values are better (delays, errors).
    LowerIsBetter,
}

/// The KPI metrics tracked across dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    Revenue,
    Tests,
    OnTime,
    Delays,
    NotUploaded,
    Errors,
}

impl MetricKind {
    /// Trend polarity of this metric.
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        match self {
            Self::Revenue | Self::Tests | Self::OnTime => Polarity::HigherIsBetter,
            Self::Delays | Self::NotUploaded | Self::Errors => Polarity::LowerIsBetter,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Tests => "Tests",
            Self::OnTime => "On time",
            Self::Delays => "Delays",
            Self::NotUploaded => "Not uploaded",
            Self::Errors => "Errors",
        }
    }

    /// Parse a metric label; unknown labels yield `None` and callers fall
    /// back to higher-is-better polarity.
    pub fn from_label(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "revenue" => Some(Self::Revenue),
            "tests" | "test" | "testcount" => Some(Self::Tests),
            "ontime" => Some(Self::OnTime),
            "delays" | "delay" | "delayed" => Some(Self::Delays),
            "notuploaded" => Some(Self::NotUploaded),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
