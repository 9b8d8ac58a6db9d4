//! Tests for trend math.

use labops_model::MetricKind;
use labops_report::{TrendDirection, direction, direction_for_label, percentage};
use proptest::prelude::*;

#[test]
fn percentage_reference_values() {
    assert_eq!(percentage(0.0, 0.0), 0.0);
    assert_eq!(percentage(150.0, 100.0), 50.0);
    assert_eq!(percentage(50.0, 100.0), -50.0);
}

#[test]
fn direction_reference_values() {
    assert_eq!(
        direction(MetricKind::Delays, 5.0, 10.0),
        TrendDirection::Positive
    );
    assert_eq!(
        direction(MetricKind::Tests, 5.0, 10.0),
        TrendDirection::Negative
    );
}

#[test]
fn unknown_metric_label_treated_as_higher_is_better() {
    assert_eq!(
        direction_for_label("samples processed", 20.0, 10.0),
        TrendDirection::Positive
    );
}

proptest! {
    #[test]
    fn percentage_sign_follows_change(current in 0.0f64..1e9, previous in 1.0f64..1e9) {
        let pct = percentage(current, previous);
        if current > previous {
            prop_assert!(pct >= 0.0);
        } else if current < previous {
            prop_assert!(pct <= 0.0);
        }
    }

    #[test]
    fn zero_baseline_is_always_neutral(current in -1e9f64..1e9) {
        prop_assert_eq!(percentage(current, 0.0), 0.0);
        prop_assert_eq!(
            direction(MetricKind::Revenue, current, 0.0),
            TrendDirection::Neutral
        );
    }
}
