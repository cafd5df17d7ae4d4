//! Input-file boundary for the geoprep toolkit.
//!
//! - **CSV loading**: long-format country/year observations, with columns
//!   matched by header name
//! - **Document loading**: hierarchical JSON/GeoJSON into a [`geoprep_model::Node`] tree

mod csv;
mod document;
mod error;

pub use csv::{REQUIRED_COLUMNS, read_observations};
pub use document::read_document;
pub use error::{IngestError, Result};
