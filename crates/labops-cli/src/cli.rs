//! CLI argument definitions for the labops dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use labops_model::NamedPeriod;

#[derive(Parser)]
#[command(
    name = "labops",
    version,
    about = "Laboratory operations dashboard - fetch, filter, and summarize LIMS test records",
    long_about = "Fetch laboratory test records from a LIMS REST endpoint (or a local\n\
                  JSON export), filter them by date range, shift, hospital unit, and\n\
                  lab section, and summarize counts, revenue, turnaround status, and\n\
                  period-over-period trends."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch records from the API and print the KPI dashboard.
    Dashboard(DashboardArgs),

    /// Run the same analysis over a local JSON records file.
    Analyze(AnalyzeArgs),

    /// Show per-record progress status (tracker view).
    Status(StatusArgs),

    /// List known hospital units by grouping.
    Units,
}

/// Filter and period selection shared by the analysis commands.
#[derive(Parser)]
pub struct FilterArgs {
    /// Named query period, resolved against today.
    #[arg(long = "period", value_enum)]
    pub period: Option<PeriodArg>,

    /// Explicit period start (overrides --period; requires --end).
    #[arg(long = "start", value_name = "YYYY-MM-DD")]
    pub start: Option<NaiveDate>,

    /// Explicit period end (overrides --period; requires --start).
    #[arg(long = "end", value_name = "YYYY-MM-DD")]
    pub end: Option<NaiveDate>,

    /// Shift filter (day, night, ...; "all" for no constraint).
    #[arg(long = "shift", default_value = "all")]
    pub shift: String,

    /// Hospital unit filter: a unit name, "mainLab", "annex", or "all".
    #[arg(long = "unit", default_value = "all")]
    pub unit: String,

    /// Lab section filter ("all" for no constraint).
    #[arg(long = "section", default_value = "all")]
    pub section: String,
}

/// Records endpoint connection options.
#[derive(Parser)]
pub struct ApiArgs {
    /// Records endpoint URL (default: $LABOPS_API_URL).
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Bearer token (default: $LABOPS_API_TOKEN).
    #[arg(long = "token", value_name = "TOKEN")]
    pub token: Option<String>,

    /// Extra fetch attempts after a retryable failure.
    #[arg(long = "retries", value_name = "N", default_value_t = 1)]
    pub retries: u32,
}

#[derive(Parser)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Re-fetch and re-render every N seconds until interrupted.
    #[arg(long = "watch", value_name = "SECONDS")]
    pub watch: Option<u64>,

    /// Write aggregate tables as CSV files into this directory.
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// JSON file containing an array of records.
    #[arg(value_name = "RECORDS_FILE")]
    pub records_file: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Write aggregate tables as CSV files into this directory.
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StatusArgs {
    /// JSON records file; when omitted, records are fetched from the API.
    #[arg(long = "input", value_name = "RECORDS_FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// CLI period choices, mirroring the dashboard's period selector.
#[derive(Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl PeriodArg {
    /// Map to the model period kind.
    pub const fn named(self) -> NamedPeriod {
        match self {
            Self::Today => NamedPeriod::Today,
            Self::Yesterday => NamedPeriod::Yesterday,
            Self::ThisWeek => NamedPeriod::ThisWeek,
            Self::ThisMonth => NamedPeriod::ThisMonth,
            Self::LastMonth => NamedPeriod::LastMonth,
            Self::ThisYear => NamedPeriod::ThisYear,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
