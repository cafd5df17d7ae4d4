//! Output-file boundary for the geoprep toolkit.
//!
//! - **CSV writing**: wide-format country-by-year tables
//! - **Document writing**: sanitized trees as pretty-printed JSON

mod csv;
mod document;
mod error;

pub use csv::write_wide_csv;
pub use document::write_document;
pub use error::{OutputError, Result};
