//! Record normalization and filtering.
//!
//! This crate sits between ingest and reporting: it turns the feed's raw
//! date/time strings into comparable values and reduces record arrays to
//! the subset a query's criteria select.

pub mod datetime;
pub mod filter;

pub use datetime::{
    day_key, end_of_day, hour_of_day, parse_date, parse_datetime, record_hour, record_timestamp,
};
pub use filter::{apply_filters, matches};
