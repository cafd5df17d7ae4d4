//! End-to-end pipelines behind the `pivot` and `sanitize` subcommands.
//!
//! Each pipeline is read, transform, write: any failure aborts the run
//! before the output file is finalized, and the error message surfaces
//! unchanged to the invoking context.

use std::path::Path;

use anyhow::Result;
use geoprep_model::YearRange;
use tracing::info;

/// What a pivot run did, for the closing summary.
#[derive(Debug, Clone, Copy)]
pub struct PivotSummary {
    pub observations: usize,
    pub countries: usize,
    pub columns: usize,
}

/// What a sanitize run did, for the closing summary.
#[derive(Debug, Clone, Copy)]
pub struct SanitizeSummary {
    pub nulls_replaced: usize,
}

/// Reads a long-format CSV, pivots it over `years`, and writes the wide
/// CSV to `output`.
pub fn run_pivot(input: &Path, output: &Path, years: YearRange) -> Result<PivotSummary> {
    let observations = geoprep_ingest::read_observations(input)?;
    let table = geoprep_transform::pivot(&observations, years);
    geoprep_output::write_wide_csv(output, &table)?;

    let summary = PivotSummary {
        observations: observations.len(),
        countries: table.rows.len(),
        columns: table.width(),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        observations = summary.observations,
        countries = summary.countries,
        "pivot complete"
    );
    Ok(summary)
}

/// Reads a document, replaces every null with `-1`, and writes the
/// sanitized tree to `output` pretty-printed.
pub fn run_sanitize(input: &Path, output: &Path) -> Result<SanitizeSummary> {
    let mut document = geoprep_ingest::read_document(input)?;
    let nulls_replaced = geoprep_transform::sanitize(&mut document);
    geoprep_output::write_document(output, &document)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        nulls_replaced,
        "sanitize complete"
    );
    Ok(SanitizeSummary { nulls_replaced })
}
