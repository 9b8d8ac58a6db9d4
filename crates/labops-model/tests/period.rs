//! Tests for period arithmetic.

use chrono::{Days, NaiveDate};
use labops_model::{NamedPeriod, Period, PeriodPair};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn pair_previous_ends_day_before_current_starts() {
    let current = Period::new(date(2025, 3, 1), date(2025, 3, 10)).unwrap();
    let pair = PeriodPair::from_current(current);
    assert_eq!(pair.previous.start, date(2025, 2, 19));
    assert_eq!(pair.previous.end, date(2025, 2, 28));
    assert_eq!(pair.current.day_count(), 10);
    assert_eq!(pair.previous.day_count(), 10);
}

#[test]
fn single_day_period_mirrors_to_single_day() {
    let pair = PeriodPair::from_current(Period::single_day(date(2025, 1, 1)));
    assert_eq!(pair.previous, Period::single_day(date(2024, 12, 31)));
}

#[test]
fn last_month_handles_year_boundary() {
    let period = Period::named(NamedPeriod::LastMonth, date(2025, 1, 15));
    assert_eq!(period.start, date(2024, 12, 1));
    assert_eq!(period.end, date(2024, 12, 31));
}

proptest! {
    #[test]
    fn previous_period_preserves_day_count_and_never_overlaps(
        offset in 0u64..20_000,
        length in 0u64..400,
    ) {
        let start = date(2000, 1, 1) + Days::new(offset);
        let end = start + Days::new(length);
        let current = Period::new(start, end).unwrap();
        let previous = current.previous();

        prop_assert_eq!(previous.day_count(), current.day_count());
        prop_assert_eq!(previous.end + Days::new(1), current.start);
        prop_assert!(previous.end < current.start);
    }
}
