//! KPI summary: headline figures for a period pair with trends.

use labops_model::{DelayStatus, MetricKind, PeriodPair, TestRecord};
use tracing::debug;

use crate::aggregate::total_revenue;
use crate::trend::{Trend, trend};

/// One KPI metric with its current value, baseline, and trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub metric: MetricKind,
    pub current: f64,
    pub previous: f64,
    pub trend: Trend,
}

/// Headline figures for a dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub periods: PeriodPair,
    pub metrics: Vec<MetricSummary>,
}

impl KpiSummary {
    /// Look up one metric's summary.
    pub fn metric(&self, kind: MetricKind) -> Option<&MetricSummary> {
        self.metrics.iter().find(|m| m.metric == kind)
    }
}

/// Figures counted from one period's filtered records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PeriodFigures {
    tests: f64,
    revenue: f64,
    on_time: f64,
    delays: f64,
    not_uploaded: f64,
}

fn figures(records: &[TestRecord]) -> PeriodFigures {
    let mut result = PeriodFigures {
        tests: records.len() as f64,
        revenue: total_revenue(records),
        ..PeriodFigures::default()
    };
    for record in records {
        let status = record
            .delay_status
            .as_deref()
            .map(DelayStatus::from_label)
            .unwrap_or(DelayStatus::Unknown);
        match status {
            DelayStatus::OnTime => result.on_time += 1.0,
            DelayStatus::DelayedUnder15 | DelayStatus::OverDelayed => result.delays += 1.0,
            DelayStatus::NotUploaded => result.not_uploaded += 1.0,
            DelayStatus::Unknown => {}
        }
    }
    result
}

/// Build the KPI summary for already-filtered current and previous
/// period records.
pub fn build_kpis(
    current: &[TestRecord],
    previous: &[TestRecord],
    periods: PeriodPair,
) -> KpiSummary {
    let now = figures(current);
    let then = figures(previous);
    debug!(
        current_records = current.len(),
        previous_records = previous.len(),
        "building kpi summary"
    );

    let pairs = [
        (MetricKind::Tests, now.tests, then.tests),
        (MetricKind::Revenue, now.revenue, then.revenue),
        (MetricKind::OnTime, now.on_time, then.on_time),
        (MetricKind::Delays, now.delays, then.delays),
        (MetricKind::NotUploaded, now.not_uploaded, then.not_uploaded),
    ];
    let metrics = pairs
        .into_iter()
        .map(|(metric, current_value, previous_value)| MetricSummary {
            metric,
            current: current_value,
            previous: previous_value,
            trend: trend(metric, current_value, previous_value),
        })
        .collect();

    KpiSummary { periods, metrics }
}
