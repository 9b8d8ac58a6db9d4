//! CSV export of aggregate tables.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Write a key/count table as a two-column CSV file.
pub fn write_counts_csv<K: Display>(
    path: &Path,
    key_header: &str,
    rows: &BTreeMap<K, u64>,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record([key_header, "count"])
        .context("write csv header")?;
    for (key, count) in rows {
        writer
            .write_record([key.to_string(), count.to_string()])
            .context("write csv row")?;
    }
    writer.flush().context("flush csv")?;
    info!(path = %path.display(), rows = rows.len(), "wrote counts csv");
    Ok(())
}

/// Write a key/amount table as a two-column CSV file.
///
/// Amounts are formatted with two decimal places.
pub fn write_revenue_csv<K: Display>(
    path: &Path,
    key_header: &str,
    rows: &BTreeMap<K, f64>,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record([key_header, "revenue"])
        .context("write csv header")?;
    for (key, amount) in rows {
        writer
            .write_record([key.to_string(), format!("{amount:.2}")])
            .context("write csv row")?;
    }
    writer.flush().context("flush csv")?;
    info!(path = %path.display(), rows = rows.len(), "wrote revenue csv");
    Ok(())
}
