//! Long-format observations and the configured year span.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default first year of the wide-format output.
pub const DEFAULT_START_YEAR: i32 = 1965;

/// Default last year of the wide-format output.
pub const DEFAULT_END_YEAR: i32 = 2022;

/// One long-format input record: a single country-year data point.
///
/// All fields are kept as strings; the pivot never interprets the value,
/// it only relocates it into the wide layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub country: String,
    pub code: String,
    pub year: String,
    pub value: String,
}

/// Inclusive year span `[start, end]` defining the wide-table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(ModelError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of year columns in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + use<> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_valid() {
        let range = YearRange::new(2019, 2021).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2019, 2020, 2021]);
    }

    #[test]
    fn year_range_single_year() {
        let range = YearRange::new(2020, 2020).unwrap();
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn year_range_rejects_inverted() {
        let result = YearRange::new(2021, 2019);
        assert!(matches!(
            result,
            Err(ModelError::InvalidYearRange {
                start: 2021,
                end: 2019
            })
        ));
    }

    #[test]
    fn year_range_default_matches_source_data() {
        let range = YearRange::default();
        assert_eq!(range.start(), 1965);
        assert_eq!(range.end(), 2022);
    }
}
