//! Local-file ingest of record arrays.
//!
//! Accepts the same JSON shape the records endpoint returns, so exported
//! feeds can be analyzed offline.

use std::fs;
use std::path::Path;

use tracing::debug;

use labops_model::TestRecord;

use crate::error::Result;

/// Read a JSON array of records from a file.
pub fn read_records_file(path: &Path) -> Result<Vec<TestRecord>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<TestRecord> = serde_json::from_str(&content)?;
    debug!(
        path = %path.display(),
        records = records.len(),
        "loaded records file"
    );
    Ok(records)
}
