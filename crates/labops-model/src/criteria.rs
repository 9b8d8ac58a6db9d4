//! Filter criteria supplied by the caller.
//!
//! The dashboard pages read these values from UI inputs; here they are an
//! explicit value object so the pipeline never reaches into a UI tree.
//! An absent value (or the literal `"all"`) means "no constraint on this
//! dimension".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::units::UnitCategory;

/// Hospital-unit dimension of the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum UnitFilter {
    /// No constraint.
    #[default]
    All,
    /// One of the named unit groupings.
    Category(UnitCategoryFilter),
    /// An exact unit name.
    Named(String),
}

/// Serde-friendly mirror of [`UnitCategory`] for criteria payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitCategoryFilter {
    MainLab,
    Annex,
}

impl UnitCategoryFilter {
    /// The unit grouping this criterion selects.
    pub const fn category(&self) -> UnitCategory {
        match self {
            Self::MainLab => UnitCategory::MainLab,
            Self::Annex => UnitCategory::Annex,
        }
    }
}

impl UnitFilter {
    /// Parse a raw criterion value: empty/`"all"` clears the constraint,
    /// a category name selects that grouping, anything else is an exact
    /// unit name.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        match UnitCategory::from_criterion(trimmed) {
            Some(UnitCategory::MainLab) => Self::Category(UnitCategoryFilter::MainLab),
            Some(UnitCategory::Annex) => Self::Category(UnitCategoryFilter::Annex),
            None => Self::Named(trimmed.to_string()),
        }
    }

    /// Whether a record's unit satisfies this criterion.
    pub fn matches(&self, unit: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(filter) => {
                unit.is_some_and(|name| filter.category().contains(name))
            }
            Self::Named(expected) => unit.is_some_and(|name| {
                name.trim().eq_ignore_ascii_case(expected.trim())
            }),
        }
    }
}

/// Criteria applied to a record array before aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive lower date bound.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound (extended to end of day).
    pub end_date: Option<NaiveDate>,
    /// Shift name, matched case-insensitively.
    pub shift: Option<String>,
    /// Hospital-unit constraint.
    pub hospital_unit: UnitFilter,
    /// Lab section, matched case-insensitively.
    pub lab_section: Option<String>,
}

impl FilterCriteria {
    /// Criteria with every dimension unconstrained.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Constrain to an inclusive date range.
    #[must_use]
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Constrain to a shift; `"all"` or empty clears the constraint.
    #[must_use]
    pub fn with_shift(mut self, shift: &str) -> Self {
        self.shift = normalize_criterion(shift);
        self
    }

    /// Constrain to a hospital unit or unit category.
    #[must_use]
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.hospital_unit = UnitFilter::parse(unit);
        self
    }

    /// Constrain to a lab section; `"all"` or empty clears the constraint.
    #[must_use]
    pub fn with_section(mut self, section: &str) -> Self {
        self.lab_section = normalize_criterion(section);
        self
    }

    /// True when no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.shift.is_none()
            && self.hospital_unit == UnitFilter::All
            && self.lab_section.is_none()
    }
}

/// Treats empty and `"all"` criterion values as absent.
fn normalize_criterion(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_values_clear_constraints() {
        let criteria = FilterCriteria::unconstrained()
            .with_shift("all")
            .with_unit("ALL")
            .with_section("  ");
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn unit_filter_parses_categories_and_names() {
        assert_eq!(
            UnitFilter::parse("mainLab"),
            UnitFilter::Category(UnitCategoryFilter::MainLab)
        );
        assert_eq!(
            UnitFilter::parse("annex"),
            UnitFilter::Category(UnitCategoryFilter::Annex)
        );
        assert_eq!(UnitFilter::parse("ICU"), UnitFilter::Named("ICU".into()));
    }

    #[test]
    fn named_unit_matches_ignore_case_and_whitespace() {
        let filter = UnitFilter::parse("icu");
        assert!(filter.matches(Some(" ICU ")));
        assert!(!filter.matches(Some("NICU")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn category_filter_matches_member_units() {
        let filter = UnitFilter::parse("mainLab");
        assert!(filter.matches(Some("A&E")));
        assert!(!filter.matches(Some("Annex OPD")));
    }
}
