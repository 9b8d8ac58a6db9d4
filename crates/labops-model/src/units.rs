//! Hospital unit names and their coarse-grained groupings.
//!
//! The dashboard filters either on an exact unit or on one of two named
//! categories: the main laboratory serves the listed inpatient and
//! outpatient units, the annex laboratory serves the annex units.

use std::fmt;

/// Inpatient units served by the main laboratory.
pub const INPATIENT_UNITS: &[&str] = &[
    "ICU",
    "NICU",
    "HDU",
    "Male Ward",
    "Female Ward",
    "Paediatric Ward",
    "Maternity Ward",
    "Surgical Ward",
];

/// Outpatient units served by the main laboratory.
pub const OUTPATIENT_UNITS: &[&str] = &[
    "OPD",
    "A&E",
    "Antenatal Clinic",
    "Diabetic Clinic",
    "Dialysis Unit",
    "Physician Clinic",
];

/// Units served by the annex laboratory.
pub const ANNEX_UNITS: &[&str] = &["Annex OPD", "Annex Ward", "Annex A&E"];

/// Named grouping of hospital units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Inpatient and outpatient units of the main laboratory.
    MainLab,
    /// Annex laboratory units.
    Annex,
}

impl UnitCategory {
    /// All unit names belonging to this category.
    pub fn units(&self) -> Vec<&'static str> {
        match self {
            Self::MainLab => INPATIENT_UNITS
                .iter()
                .chain(OUTPATIENT_UNITS)
                .copied()
                .collect(),
            Self::Annex => ANNEX_UNITS.to_vec(),
        }
    }

    /// Whether `unit` belongs to this category (case-insensitive).
    pub fn contains(&self, unit: &str) -> bool {
        let needle = unit.trim();
        self.units()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(needle))
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MainLab => "Main Lab",
            Self::Annex => "Annex",
        }
    }

    /// Parse a category criterion value ("mainLab", "annex").
    pub fn from_criterion(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "mainlab" | "main_lab" | "main lab" => Some(Self::MainLab),
            "annex" => Some(Self::Annex),
            _ => None,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
