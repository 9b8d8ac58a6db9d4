use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid period: end {end} precedes start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}

pub type Result<T> = std::result::Result<T, ModelError>;
