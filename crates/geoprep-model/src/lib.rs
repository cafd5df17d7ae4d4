//! Core data model for the geoprep toolkit.
//!
//! This crate defines the types shared by ingestion, transformation, and
//! output:
//!
//! - [`Observation`]: one long-format country/year/value record
//! - [`YearRange`]: the inclusive year span of a wide-format table
//! - [`WideTable`] / [`CountryRow`]: the pivoted wide-format result
//! - [`Node`]: the document tree used by the null sanitizer

pub mod document;
pub mod error;
pub mod observation;
pub mod table;

pub use document::Node;
pub use error::{ModelError, Result};
pub use observation::{DEFAULT_END_YEAR, DEFAULT_START_YEAR, Observation, YearRange};
pub use table::{CountryRow, WideTable};
