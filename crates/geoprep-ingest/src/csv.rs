//! Long-format CSV reading.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use geoprep_model::Observation;

use crate::error::{IngestError, Result};

/// Header names the long-format input must carry, matched by name and
/// independent of column order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Country", "Code", "Year", "Nuclear_Pct"];

/// Column indexes resolved from a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    country: usize,
    code: usize,
    year: usize,
    value: usize,
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Locates a required column in the header, tolerating a UTF-8 BOM on the
/// first cell.
fn find_column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim() == name)
        .ok_or_else(|| IngestError::MissingColumn {
            column: name.to_string(),
            path: path.to_path_buf(),
        })
}

fn resolve_columns(headers: &StringRecord, path: &Path) -> Result<ColumnIndexes> {
    Ok(ColumnIndexes {
        country: find_column(headers, REQUIRED_COLUMNS[0], path)?,
        code: find_column(headers, REQUIRED_COLUMNS[1], path)?,
        year: find_column(headers, REQUIRED_COLUMNS[2], path)?,
        value: find_column(headers, REQUIRED_COLUMNS[3], path)?,
    })
}

/// Pulls one required field out of a record, failing when the row is too
/// short to carry it.
fn field(record: &StringRecord, idx: usize, column: &str, path: &Path) -> Result<String> {
    record
        .get(idx)
        .map(|value| value.to_string())
        .ok_or_else(|| IngestError::MissingField {
            column: column.to_string(),
            line: record.position().map_or(0, |p| p.line()),
            path: path.to_path_buf(),
        })
}

/// Reads a long-format CSV into observations.
///
/// The header row must name all of [`REQUIRED_COLUMNS`]; extra columns are
/// ignored. Values are whitespace-trimmed. Rows shorter than the header
/// fail with [`IngestError::MissingField`].
pub fn read_observations(path: &Path) -> Result<Vec<Observation>> {
    let file = open_input(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let columns = resolve_columns(&headers, path)?;

    let mut observations = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        observations.push(Observation {
            country: field(&record, columns.country, REQUIRED_COLUMNS[0], path)?,
            code: field(&record, columns.code, REQUIRED_COLUMNS[1], path)?,
            year: field(&record, columns.year, REQUIRED_COLUMNS[2], path)?,
            value: field(&record, columns.value, REQUIRED_COLUMNS[3], path)?,
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = observations.len(),
        "loaded long-format CSV"
    );

    Ok(observations)
}
