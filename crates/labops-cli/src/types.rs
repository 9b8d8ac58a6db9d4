//! Result types shared by the pipeline and summary printing.

use std::collections::BTreeMap;

use labops_model::PeriodPair;
use labops_report::{KpiSummary, RecordStatus};

/// Everything a dashboard render needs for one fetch/filter cycle.
#[derive(Debug, Clone)]
pub struct DashboardResult {
    pub periods: PeriodPair,
    pub kpis: KpiSummary,
    pub daily_counts: BTreeMap<String, u64>,
    pub hourly_counts: BTreeMap<u32, u64>,
    pub unit_counts: BTreeMap<String, u64>,
    pub test_counts: BTreeMap<String, u64>,
    pub unit_revenue: BTreeMap<String, f64>,
    /// Records in the current period after filtering.
    pub filtered_count: usize,
    /// Records received for the current period before filtering.
    pub fetched_count: usize,
}

/// One row of the tracker view.
#[derive(Debug, Clone)]
pub struct StatusRow {
    pub lab_number: String,
    pub test_name: String,
    pub hospital_unit: String,
    pub expected: String,
    pub status: RecordStatus,
}

/// The tracker view: per-record rows plus class totals.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub rows: Vec<StatusRow>,
    pub class_counts: BTreeMap<String, u64>,
}
