//! File writing utilities for processed datasets.
//!
//! Export is CSV only: UTF-8, header row included, one row per surviving
//! record, original columns followed by the derived sentiment columns.
//! Scores are written as plain decimals with full precision; rounding is a
//! display concern.

use crate::error::Result;
use crate::table::Table;
use csv::Writer;
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write a processed table to a CSV file.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn write_table_csv(table: &Table, file_path: &Path) -> Result<()> {
    let file = File::create(file_path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    writer.flush()?;
    debug!(path = %file_path.display(), rows = table.len(), "Wrote CSV export");
    Ok(())
}

/// Write a processed table under a timestamp-based directory structure.
///
/// Creates `output_dir/timestamp/` and writes `file_name` inside it,
/// returning the path to the created file.
pub fn write_table_to_timestamped_dir(
    table: &Table,
    output_dir: &Path,
    timestamp: &str,
    file_name: &str,
) -> Result<PathBuf> {
    let date_dir = output_dir.join(timestamp);
    create_dir_all(&date_dir)?;

    let file_path = date_dir.join(file_name);
    write_table_csv(table, &file_path)?;
    Ok(file_path)
}
