//! Delay-status vocabulary assigned by the LIMS to each result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed form of the free-text `delay_status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayStatus {
    /// Result available within the expected turnaround time.
    OnTime,
    /// Result late by less than fifteen minutes.
    DelayedUnder15,
    /// Result late by fifteen minutes or more.
    OverDelayed,
    /// Result never uploaded to the LIMS.
    NotUploaded,
    /// Label not in the known vocabulary.
    Unknown,
}

impl DelayStatus {
    /// Parse a LIMS delay label. Unknown labels classify as
    /// [`DelayStatus::Unknown`] rather than erroring.
    pub fn from_label(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Self::Unknown;
        }
        if normalized.contains("not upload") {
            return Self::NotUploaded;
        }
        if normalized.contains("on time") || normalized == "ontime" {
            return Self::OnTime;
        }
        if normalized.contains("<15") || normalized.contains("under 15") {
            return Self::DelayedUnder15;
        }
        if normalized.contains("delay") {
            return Self::OverDelayed;
        }
        Self::Unknown
    }

    /// Whether the result missed its expected turnaround time.
    pub const fn is_delayed(&self) -> bool {
        matches!(self, Self::DelayedUnder15 | Self::OverDelayed)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OnTime => "On Time",
            Self::DelayedUnder15 => "Delayed <15min",
            Self::OverDelayed => "Over Delayed",
            Self::NotUploaded => "Not Uploaded",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DelayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_round_trip() {
        assert_eq!(DelayStatus::from_label("On Time"), DelayStatus::OnTime);
        assert_eq!(
            DelayStatus::from_label("Delayed <15min"),
            DelayStatus::DelayedUnder15
        );
        assert_eq!(
            DelayStatus::from_label("over delayed"),
            DelayStatus::OverDelayed
        );
        assert_eq!(
            DelayStatus::from_label("Not Uploaded"),
            DelayStatus::NotUploaded
        );
    }

    #[test]
    fn unknown_and_empty_labels_do_not_error() {
        assert_eq!(DelayStatus::from_label(""), DelayStatus::Unknown);
        assert_eq!(DelayStatus::from_label("pending"), DelayStatus::Unknown);
        assert!(!DelayStatus::Unknown.is_delayed());
        assert!(DelayStatus::OverDelayed.is_delayed());
    }
}
