//! Wide-format CSV writing.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::Writer;
use geoprep_model::WideTable;

use crate::error::{OutputError, Result};

/// Writes a wide table as CSV: header row, then one row per country.
///
/// Quoting and escaping follow standard CSV conventions via the `csv`
/// writer; empty cells stand for years without an observation.
pub fn write_wide_csv(path: &Path, table: &WideTable) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::FileCreate {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = Writer::from_writer(BufWriter::new(file));

    let csv_err = |e: csv::Error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    writer.write_record(table.header()).map_err(csv_err)?;
    for row in &table.rows {
        writer.write_record(row.cells(table.years)).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        rows = table.rows.len(),
        "wrote wide-format CSV"
    );

    Ok(())
}
