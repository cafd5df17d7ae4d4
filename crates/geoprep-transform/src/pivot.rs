//! Long-to-wide pivot.

use indexmap::IndexMap;

use geoprep_model::{CountryRow, Observation, WideTable, YearRange};

/// Pivots long-format observations into a wide table with one row per
/// distinct country and one column per year in `years`.
///
/// Rows come out in the order countries were first encountered. The
/// country code is fixed by the first observation for that country;
/// later codes for the same country are not re-validated. Duplicate
/// (country, year) pairs resolve last-write-wins. Years outside `years`
/// are retained on the row but never emitted.
pub fn pivot(observations: &[Observation], years: YearRange) -> WideTable {
    let mut entries: IndexMap<&str, CountryRow> = IndexMap::new();

    for obs in observations {
        let entry = entries
            .entry(obs.country.as_str())
            .or_insert_with(|| CountryRow::new(obs.country.clone(), obs.code.clone()));
        entry.values.insert(obs.year.clone(), obs.value.clone());
    }

    let table = WideTable {
        years,
        rows: entries.into_values().collect(),
    };

    tracing::debug!(
        countries = table.rows.len(),
        columns = table.width(),
        "pivoted observations"
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(country: &str, code: &str, year: &str, value: &str) -> Observation {
        Observation {
            country: country.to_string(),
            code: code.to_string(),
            year: year.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn one_row_per_country_spanning_years() {
        // Scenario: two years for one country collapse into one row.
        let rows = vec![obs("Fr", "FRA", "2020", "70"), obs("Fr", "FRA", "2021", "69")];
        let table = pivot(&rows, YearRange::new(2020, 2021).unwrap());

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells(table.years), vec!["Fr", "FRA", "70", "69"]);
    }

    #[test]
    fn unobserved_years_emit_empty_cells() {
        // Scenario: range wider than the data leaves empty edges.
        let rows = vec![obs("Fr", "FRA", "2020", "70"), obs("Us", "USA", "2020", "19")];
        let years = YearRange::new(2019, 2021).unwrap();
        let table = pivot(&rows, years);

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells(years), vec!["Fr", "FRA", "", "70", ""]);
        assert_eq!(table.rows[1].cells(years), vec!["Us", "USA", "", "19", ""]);
    }

    #[test]
    fn row_count_equals_distinct_countries() {
        let rows = vec![
            obs("Fr", "FRA", "2019", "71"),
            obs("Us", "USA", "2019", "19"),
            obs("Fr", "FRA", "2020", "70"),
            obs("De", "DEU", "2020", "11"),
            obs("Us", "USA", "2021", "18"),
        ];
        let table = pivot(&rows, YearRange::new(1965, 2022).unwrap());

        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn every_row_has_fixed_width() {
        let rows = vec![obs("Fr", "FRA", "2020", "70"), obs("Us", "USA", "1999", "20")];
        let years = YearRange::new(2019, 2021).unwrap();
        let table = pivot(&rows, years);

        for row in &table.rows {
            assert_eq!(row.cells(years).len(), 2 + 3);
        }
        assert_eq!(table.header().len(), 2 + 3);
    }

    #[test]
    fn duplicate_country_year_is_last_write_wins() {
        let rows = vec![obs("Fr", "FRA", "2020", "70"), obs("Fr", "FRA", "2020", "72")];
        let years = YearRange::new(2020, 2020).unwrap();
        let table = pivot(&rows, years);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells(years), vec!["Fr", "FRA", "72"]);
    }

    #[test]
    fn first_observation_fixes_country_code() {
        let rows = vec![obs("Fr", "FRA", "2020", "70"), obs("Fr", "FR2", "2021", "69")];
        let table = pivot(&rows, YearRange::new(2020, 2021).unwrap());

        assert_eq!(table.rows[0].code, "FRA");
    }

    #[test]
    fn rows_keep_first_encounter_order() {
        let rows = vec![
            obs("Us", "USA", "2020", "19"),
            obs("Fr", "FRA", "2020", "70"),
            obs("Us", "USA", "2021", "18"),
        ];
        let table = pivot(&rows, YearRange::new(2020, 2021).unwrap());

        let countries: Vec<_> = table.rows.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, vec!["Us", "Fr"]);
    }

    #[test]
    fn out_of_range_years_are_silently_dropped() {
        let rows = vec![obs("Fr", "FRA", "1902", "0"), obs("Fr", "FRA", "2020", "70")];
        let years = YearRange::new(2020, 2020).unwrap();
        let table = pivot(&rows, years);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells(years), vec!["Fr", "FRA", "70"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = pivot(&[], YearRange::new(2020, 2021).unwrap());
        assert!(table.rows.is_empty());
        assert_eq!(table.header(), vec!["Country", "Code", "2020", "2021"]);
    }
}
