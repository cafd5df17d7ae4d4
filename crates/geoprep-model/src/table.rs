//! Wide-format table produced by the pivot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::observation::YearRange;

/// One wide-format row: a country, its code, and its per-year values.
///
/// `values` is keyed by year string exactly as it appeared in the input.
/// Years outside the configured range may be present here; they are simply
/// never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRow {
    pub country: String,
    pub code: String,
    pub values: IndexMap<String, String>,
}

impl CountryRow {
    pub fn new(country: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            values: IndexMap::new(),
        }
    }

    /// The emitted cells for this row: country, code, then one cell per
    /// year in the range (empty when the year was never observed).
    pub fn cells(&self, years: YearRange) -> Vec<String> {
        let mut cells = Vec::with_capacity(2 + years.len());
        cells.push(self.country.clone());
        cells.push(self.code.clone());
        for year in years.years() {
            let value = self
                .values
                .get(year.to_string().as_str())
                .cloned()
                .unwrap_or_default();
            cells.push(value);
        }
        cells
    }
}

/// The pivoted table: header span plus one row per distinct country, in
/// first-encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideTable {
    pub years: YearRange,
    pub rows: Vec<CountryRow>,
}

impl WideTable {
    pub fn new(years: YearRange) -> Self {
        Self {
            years,
            rows: Vec::new(),
        }
    }

    /// Header cells: `Country`, `Code`, then each year in the range.
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(2 + self.years.len());
        header.push("Country".to_string());
        header.push("Code".to_string());
        header.extend(self.years.years().map(|year| year.to_string()));
        header
    }

    /// Number of columns every emitted row carries.
    pub fn width(&self) -> usize {
        2 + self.years.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_spans_range() {
        let table = WideTable::new(YearRange::new(2019, 2021).unwrap());
        assert_eq!(table.header(), vec!["Country", "Code", "2019", "2020", "2021"]);
        assert_eq!(table.width(), 5);
    }

    #[test]
    fn cells_fill_missing_years_with_empty() {
        let years = YearRange::new(2019, 2021).unwrap();
        let mut row = CountryRow::new("Fr", "FRA");
        row.values.insert("2020".to_string(), "70".to_string());

        assert_eq!(row.cells(years), vec!["Fr", "FRA", "", "70", ""]);
    }

    #[test]
    fn cells_ignore_out_of_range_years() {
        let years = YearRange::new(2020, 2020).unwrap();
        let mut row = CountryRow::new("Fr", "FRA");
        row.values.insert("1999".to_string(), "55".to_string());
        row.values.insert("2020".to_string(), "70".to_string());

        assert_eq!(row.cells(years), vec!["Fr", "FRA", "70"]);
    }
}
