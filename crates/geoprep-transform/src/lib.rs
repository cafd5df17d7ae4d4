//! The two geoprep transformations.
//!
//! Both are pure, single-pass, in-memory reshapes:
//!
//! - [`pivot`]: long-format observations into a wide country-by-year table
//! - [`sanitize`]: replace every null in a document tree with `-1`

mod pivot;
mod sanitize;

pub use pivot::pivot;
pub use sanitize::sanitize;
