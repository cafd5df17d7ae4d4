//! Subcommand execution.

use anyhow::Result;
use geoprep_cli::pipeline::{run_pivot, run_sanitize};
use geoprep_model::YearRange;

use crate::cli::{PivotArgs, SanitizeArgs};

pub fn pivot(args: &PivotArgs) -> Result<()> {
    let years = YearRange::new(args.start_year, args.end_year)?;
    let summary = run_pivot(&args.input, &args.output, years)?;
    println!(
        "Pivoted {} observations into {} countries x {} columns -> {}",
        summary.observations,
        summary.countries,
        summary.columns,
        args.output.display()
    );
    Ok(())
}

pub fn sanitize(args: &SanitizeArgs) -> Result<()> {
    let summary = run_sanitize(&args.input, &args.output)?;
    println!(
        "Replaced {} nulls with -1 -> {}",
        summary.nulls_replaced,
        args.output.display()
    );
    Ok(())
}
