//! CLI argument definitions for geoprep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use geoprep_model::{DEFAULT_END_YEAR, DEFAULT_START_YEAR};

#[derive(Parser)]
#[command(
    name = "geoprep",
    version,
    about = "geoprep - reshape long-format country data for mapping",
    long_about = "Prepare country-level datasets for proportional-symbol mapping.\n\n\
                  Pivots long-format country/year CSV data into a wide table, and\n\
                  replaces nulls in GeoJSON-style documents with a -1 sentinel."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pivot a long-format CSV into one row per country, one column per year.
    Pivot(PivotArgs),

    /// Replace every null in a JSON/GeoJSON document with -1.
    Sanitize(SanitizeArgs),
}

#[derive(Parser)]
pub struct PivotArgs {
    /// Long-format input CSV with Country, Code, Year, Nuclear_Pct columns.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Wide-format output CSV.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// First year column of the output.
    #[arg(long = "start-year", value_name = "YEAR", default_value_t = DEFAULT_START_YEAR)]
    pub start_year: i32,

    /// Last year column of the output (inclusive).
    #[arg(long = "end-year", value_name = "YEAR", default_value_t = DEFAULT_END_YEAR)]
    pub end_year: i32,
}

#[derive(Parser)]
pub struct SanitizeArgs {
    /// Input document (JSON or GeoJSON).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Sanitized output document.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
