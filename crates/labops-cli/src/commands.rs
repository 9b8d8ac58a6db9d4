//! Command handlers: wire CLI arguments into the pipeline and print
//! results.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{info, info_span};

use labops_ingest::{ApiConfig, LimsClient, RetryPolicy, read_records_file};
use labops_model::{FilterCriteria, NamedPeriod, PeriodPair};
use labops_transform::apply_filters;

use crate::cli::{AnalyzeArgs, ApiArgs, DashboardArgs, FilterArgs, PeriodArg, StatusArgs};
use labops_cli::pipeline::{
    analyze_file, derive_period_from_records, export_aggregates, fetch_and_analyze,
    resolve_period, status_report,
};
use crate::summary::{print_dashboard, print_status, print_units};

/// Environment variable holding the records endpoint URL.
const API_URL_ENV: &str = "LABOPS_API_URL";

/// Environment variable holding the bearer token.
const API_TOKEN_ENV: &str = "LABOPS_API_TOKEN";

pub fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    let client = build_client(&args.api)?;
    let criteria = criteria_from(&args.filters);

    let mut cycle = || -> Result<()> {
        let span = info_span!("dashboard");
        let _guard = span.enter();
        let today = Local::now().date_naive();
        let period = resolve_period(
            args.filters.period.map(PeriodArg::named),
            args.filters.start,
            args.filters.end,
            today,
            NamedPeriod::ThisMonth,
        )?;
        let periods = PeriodPair::from_current(period);
        let result = fetch_and_analyze(&client, periods, &criteria)?;
        print_dashboard(&result);
        if let Some(dir) = &args.export_dir {
            let written = export_aggregates(dir, &result)?;
            println!("Exported {} CSV files to {}", written.len(), dir.display());
        }
        Ok(())
    };

    match args.watch {
        None => cycle(),
        Some(interval_secs) => {
            // Sequential loop: the next fetch starts only after the
            // previous render finished, so a slow response can never
            // overwrite a newer one.
            let interval = Duration::from_secs(interval_secs.max(1));
            info!(interval_secs = interval.as_secs(), "watch mode");
            loop {
                if let Err(error) = cycle() {
                    eprintln!("refresh failed: {error:#}");
                }
                thread::sleep(interval);
            }
        }
    }
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let span = info_span!("analyze", file = %args.records_file.display());
    let _guard = span.enter();
    let criteria = criteria_from(&args.filters);
    let today = Local::now().date_naive();

    // Without an explicit period, cover the whole file.
    let period = if args.filters.period.is_none()
        && args.filters.start.is_none()
        && args.filters.end.is_none()
    {
        let records = read_records_file(&args.records_file)
            .with_context(|| format!("read records from {}", args.records_file.display()))?;
        derive_period_from_records(&records, today)
    } else {
        resolve_period(
            args.filters.period.map(PeriodArg::named),
            args.filters.start,
            args.filters.end,
            today,
            NamedPeriod::ThisMonth,
        )?
    };

    let periods = PeriodPair::from_current(period);
    let result = analyze_file(&args.records_file, periods, &criteria)?;
    print_dashboard(&result);
    if let Some(dir) = &args.export_dir {
        let written = export_aggregates(dir, &result)?;
        println!("Exported {} CSV files to {}", written.len(), dir.display());
    }
    Ok(())
}

pub fn run_status(args: &StatusArgs) -> Result<()> {
    let span = info_span!("status");
    let _guard = span.enter();
    let criteria = criteria_from(&args.filters);
    let today = Local::now().date_naive();
    let period = resolve_period(
        args.filters.period.map(PeriodArg::named),
        args.filters.start,
        args.filters.end,
        today,
        NamedPeriod::Today,
    )?;

    let records = match &args.input {
        Some(path) => read_records_file(path)
            .with_context(|| format!("read records from {}", path.display()))?,
        None => {
            let client = build_client(&args.api)?;
            client.fetch_records(&period).context("fetch records")?
        }
    };

    let criteria = criteria.with_dates(Some(period.start), Some(period.end));
    let filtered = apply_filters(&records, &criteria);
    let report = status_report(&filtered, Local::now().naive_local());
    print_status(&report);
    Ok(())
}

pub fn run_units() -> Result<()> {
    print_units();
    Ok(())
}

fn criteria_from(filters: &FilterArgs) -> FilterCriteria {
    FilterCriteria::unconstrained()
        .with_shift(&filters.shift)
        .with_unit(&filters.unit)
        .with_section(&filters.section)
}

fn build_client(api: &ApiArgs) -> Result<LimsClient> {
    let base_url = match &api.api_url {
        Some(url) => url.clone(),
        None => match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => bail!("no records endpoint: pass --api-url or set {API_URL_ENV}"),
        },
    };
    let token = match &api.token {
        Some(token) => token.clone(),
        None => std::env::var(API_TOKEN_ENV).unwrap_or_default(),
    };
    let config = ApiConfig::new(base_url, token)
        .with_context(|| format!("pass --token or set {API_TOKEN_ENV}"))?;
    let retry = RetryPolicy {
        max_attempts: api.retries.saturating_add(1).max(1),
        ..RetryPolicy::default()
    };
    Ok(LimsClient::new(config)?.with_retry(retry))
}
