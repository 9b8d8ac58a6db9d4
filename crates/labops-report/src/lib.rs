//! Reporting layer: aggregation maps, trend math, progress
//! classification, KPI assembly, and CSV export.

pub mod aggregate;
pub mod export;
pub mod kpi;
pub mod status;
pub mod trend;

pub use aggregate::{
    count_by_day, count_by_hour, count_by_test, count_by_unit, revenue_by_day, revenue_by_unit,
    total_revenue,
};
pub use export::{write_counts_csv, write_revenue_csv};
pub use kpi::{KpiSummary, MetricSummary, build_kpis};
pub use status::{RecordStatus, classify, classify_record};
pub use trend::{Trend, TrendDirection, direction, direction_for_label, percentage, trend};
