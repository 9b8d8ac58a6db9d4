//! Pipeline orchestration: source → filter → aggregate → trend.
//!
//! Each function here is pure with respect to its inputs (the record
//! arrays and criteria are supplied by the caller), so the whole cycle
//! is testable without a network or a terminal.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use labops_ingest::{LimsClient, read_records_file};
use labops_model::{FilterCriteria, NamedPeriod, Period, PeriodPair, TestRecord};
use labops_report::{
    build_kpis, classify_record, count_by_day, count_by_hour, count_by_test, count_by_unit,
    revenue_by_unit, write_counts_csv, write_revenue_csv,
};
use labops_transform::{apply_filters, parse_date};

use crate::types::{DashboardResult, StatusReport, StatusRow};

/// Resolve the query period from CLI inputs.
///
/// Explicit `--start`/`--end` dates win over a named period; a named
/// period resolves against `today`; with neither, `fallback` applies.
pub fn resolve_period(
    named: Option<NamedPeriod>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    fallback: NamedPeriod,
) -> Result<Period> {
    match (start, end) {
        (Some(start), Some(end)) => {
            Period::new(start, end).context("invalid --start/--end range")
        }
        (Some(_), None) | (None, Some(_)) => {
            bail!("--start and --end must be given together")
        }
        (None, None) => Ok(Period::named(named.unwrap_or(fallback), today)),
    }
}

/// Smallest period covering every parseable record date; `today` as a
/// single-day fallback when nothing parses.
pub fn derive_period_from_records(records: &[TestRecord], today: NaiveDate) -> Period {
    let mut dates = records
        .iter()
        .filter_map(|record| record.date.as_deref().and_then(parse_date));
    let Some(first) = dates.next() else {
        return Period::single_day(today);
    };
    let (min, max) = dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    });
    // min <= max by construction.
    Period { start: min, end: max }
}

/// Run one filter/aggregate/trend cycle over already-fetched records.
///
/// `current` and `previous` are the raw feeds for the two periods;
/// `criteria` carries the non-date dimensions and is applied to each
/// period with that period's date bounds.
pub fn analyze_records(
    current: &[TestRecord],
    previous: &[TestRecord],
    periods: PeriodPair,
    criteria: &FilterCriteria,
) -> DashboardResult {
    let started = Instant::now();
    let current_criteria = criteria.clone().with_dates(
        Some(periods.current.start),
        Some(periods.current.end),
    );
    let previous_criteria = criteria.clone().with_dates(
        Some(periods.previous.start),
        Some(periods.previous.end),
    );

    let current_filtered = apply_filters(current, &current_criteria);
    let previous_filtered = apply_filters(previous, &previous_criteria);
    debug!(
        current = current_filtered.len(),
        previous = previous_filtered.len(),
        "filtered period pair"
    );

    let result = DashboardResult {
        periods,
        kpis: build_kpis(&current_filtered, &previous_filtered, periods),
        daily_counts: count_by_day(&current_filtered),
        hourly_counts: count_by_hour(&current_filtered),
        unit_counts: count_by_unit(&current_filtered),
        test_counts: count_by_test(&current_filtered),
        unit_revenue: revenue_by_unit(&current_filtered),
        filtered_count: current_filtered.len(),
        fetched_count: current.len(),
    };
    info!(
        period = %periods.current,
        records = result.filtered_count,
        duration_ms = started.elapsed().as_millis(),
        "analysis complete"
    );
    result
}

/// Fetch both periods from the records endpoint and analyze them.
pub fn fetch_and_analyze(
    client: &LimsClient,
    periods: PeriodPair,
    criteria: &FilterCriteria,
) -> Result<DashboardResult> {
    let (current, previous) = client
        .fetch_period_pair(&periods)
        .context("fetch records")?;
    Ok(analyze_records(&current, &previous, periods, criteria))
}

/// Load a records file and analyze it for the given periods.
///
/// The previous period is filtered from the same file, so trends work
/// offline.
pub fn analyze_file(
    path: &Path,
    periods: PeriodPair,
    criteria: &FilterCriteria,
) -> Result<DashboardResult> {
    let records = read_records_file(path)
        .with_context(|| format!("read records from {}", path.display()))?;
    Ok(analyze_records(&records, &records, periods, criteria))
}

/// Build the tracker view for a filtered record array.
pub fn status_report(records: &[TestRecord], now: NaiveDateTime) -> StatusReport {
    let mut rows = Vec::with_capacity(records.len());
    let mut class_counts = std::collections::BTreeMap::new();
    for record in records {
        let status = classify_record(record, now);
        *class_counts
            .entry(status.class_label().to_string())
            .or_insert(0) += 1;
        rows.push(StatusRow {
            lab_number: field_or_dash(record.lab_number.as_deref()),
            test_name: field_or_dash(record.test_name.as_deref()),
            hospital_unit: field_or_dash(record.hospital_unit.as_deref()),
            expected: field_or_dash(record.time_expected.as_deref()),
            status,
        });
    }
    StatusReport { rows, class_counts }
}

/// Write the cycle's aggregate tables to CSV files in `dir`.
pub fn export_aggregates(dir: &Path, result: &DashboardResult) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create export dir {}", dir.display()))?;
    let mut written = Vec::new();

    let path = dir.join("daily_counts.csv");
    write_counts_csv(&path, "day", &result.daily_counts)?;
    written.push(path);

    let path = dir.join("hourly_counts.csv");
    write_counts_csv(&path, "hour", &result.hourly_counts)?;
    written.push(path);

    let path = dir.join("unit_counts.csv");
    write_counts_csv(&path, "unit", &result.unit_counts)?;
    written.push(path);

    let path = dir.join("test_counts.csv");
    write_counts_csv(&path, "test", &result.test_counts)?;
    written.push(path);

    let path = dir.join("unit_revenue.csv");
    write_revenue_csv(&path, "unit", &result.unit_revenue)?;
    written.push(path);

    Ok(written)
}

fn field_or_dash(value: Option<&str>) -> String {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        trimmed.to_string()
    }
}
