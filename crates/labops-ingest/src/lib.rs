//! Record ingest: the LIMS records endpoint client and local-file
//! loading.

mod client;
mod error;
mod file;

pub use client::{ApiConfig, LimsClient, RetryPolicy};
pub use error::{FetchError, Result};
pub use file::read_records_file;
