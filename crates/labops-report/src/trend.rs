//! Trend math: percentage change and direction between period aggregates.

use std::fmt;

use labops_model::{MetricKind, Polarity};

/// Direction of a metric's movement relative to its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// The metric improved.
    Positive,
    /// The metric regressed.
    Negative,
    /// No previous baseline, or no movement.
    Neutral,
}

impl TrendDirection {
    /// Arrow glyph for table rendering.
    #[must_use]
    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Positive => "▲",
            Self::Negative => "▼",
            Self::Neutral => "–",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        };
        write!(f, "{label}")
    }
}

/// Percentage change from `previous` to `current`.
///
/// Returns 0 when `previous` is 0 or either input is not finite;
/// otherwise `(current - previous) / |previous| * 100`, rounded to one
/// decimal, with magnitudes under 0.01 snapped to 0.
pub fn percentage(current: f64, previous: f64) -> f64 {
    if !current.is_finite() || !previous.is_finite() || previous == 0.0 {
        return 0.0;
    }
    let change = (current - previous) / previous.abs() * 100.0;
    let rounded = (change * 10.0).round() / 10.0;
    if rounded.abs() < 0.01 { 0.0 } else { rounded }
}

/// Direction of movement for a metric of the given polarity.
pub fn direction_for_polarity(polarity: Polarity, current: f64, previous: f64) -> TrendDirection {
    if !current.is_finite() || !previous.is_finite() || previous == 0.0 || current == previous {
        return TrendDirection::Neutral;
    }
    let increased = current > previous;
    let improved = match polarity {
        Polarity::HigherIsBetter => increased,
        Polarity::LowerIsBetter => !increased,
    };
    if improved {
        TrendDirection::Positive
    } else {
        TrendDirection::Negative
    }
}

/// Direction of movement for a known metric kind.
pub fn direction(metric: MetricKind, current: f64, previous: f64) -> TrendDirection {
    direction_for_polarity(metric.polarity(), current, previous)
}

/// Direction for a free-text metric label; unknown labels fall back to
/// higher-is-better polarity.
pub fn direction_for_label(label: &str, current: f64, previous: f64) -> TrendDirection {
    let polarity = MetricKind::from_label(label)
        .map(|kind| kind.polarity())
        .unwrap_or_default();
    direction_for_polarity(polarity, current, previous)
}

/// A computed percentage/direction pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub percentage: f64,
    pub direction: TrendDirection,
}

/// Trend of a metric between a previous and current aggregate.
pub fn trend(metric: MetricKind, current: f64, previous: f64) -> Trend {
    Trend {
        percentage: percentage(current, previous),
        direction: direction(metric, current, previous),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_baseline_yields_zero_percentage() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(42.0, 0.0), 0.0);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(150.0, 100.0), 50.0);
        assert_eq!(percentage(50.0, 100.0), -50.0);
        assert_eq!(percentage(1.0, 3.0), -66.7);
    }

    #[test]
    fn negative_baseline_uses_absolute_value() {
        assert_eq!(percentage(-50.0, -100.0), 50.0);
    }

    #[test]
    fn non_finite_inputs_are_neutral() {
        assert_eq!(percentage(f64::NAN, 100.0), 0.0);
        assert_eq!(
            direction(MetricKind::Tests, f64::INFINITY, 10.0),
            TrendDirection::Neutral
        );
    }

    #[test]
    fn polarity_maps_improvement() {
        assert_eq!(
            direction(MetricKind::Delays, 5.0, 10.0),
            TrendDirection::Positive
        );
        assert_eq!(
            direction(MetricKind::Tests, 5.0, 10.0),
            TrendDirection::Negative
        );
        assert_eq!(
            direction(MetricKind::Revenue, 10.0, 5.0),
            TrendDirection::Positive
        );
    }

    #[test]
    fn equal_values_and_zero_baseline_are_neutral() {
        assert_eq!(
            direction(MetricKind::Tests, 7.0, 7.0),
            TrendDirection::Neutral
        );
        assert_eq!(
            direction(MetricKind::Tests, 7.0, 0.0),
            TrendDirection::Neutral
        );
    }

    #[test]
    fn unknown_labels_default_to_higher_is_better() {
        assert_eq!(
            direction_for_label("throughput", 5.0, 10.0),
            TrendDirection::Negative
        );
        assert_eq!(
            direction_for_label("delays", 5.0, 10.0),
            TrendDirection::Positive
        );
    }
}
