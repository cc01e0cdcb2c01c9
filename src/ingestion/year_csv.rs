//! Parser for the authority-by-year table.
//!
//! A CSV carrying a single fixed measure: the header row names the
//! authority-code column followed by one column per year, and each data row
//! carries one area's readings:
//!
//! ```csv
//! AuthorityCode,2010,2011,2012
//! W06000001,68.9,69.1,69.3
//! ```
//!
//! The fixed measure's codename and label come from the column mapping
//! ([`SourceColumn::SingleMeasureCode`] / [`SourceColumn::SingleMeasureName`]),
//! not from the file.

use std::io::Read;

use crate::error::{DataError, DataResult};
use crate::filter::{ImportFilters, string_filter_matches, year_filter_matches};
use crate::ingestion::{ColumnMapping, SourceColumn};
use crate::model::{Area, Areas, Measure};

/// Ingest an authority-by-year CSV into `areas`.
///
/// Rules:
///
/// - The mapping must have exactly three entries (code header + fixed measure
///   code and label).
/// - The header's first cell must equal the configured authority-code header.
/// - Every remaining header cell must parse as a year and every data cell as a
///   number; an empty or non-numeric cell is a fatal parse error, not a
///   missing reading. Cells under a filtered-out year are skipped unparsed.
pub(crate) fn populate<R: Read>(
    areas: &mut Areas,
    reader: R,
    columns: &ColumnMapping,
    filters: &ImportFilters,
) -> DataResult<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(DataError::Malformed("missing header row".to_string()));
    }
    if columns.len() != 3 {
        return Err(DataError::ColumnCount {
            expected: 3,
            found: columns.len(),
        });
    }

    let code_header = mapping_value(columns, SourceColumn::AuthCode)?;
    if headers.get(0) != Some(code_header) {
        return Err(DataError::Malformed(format!(
            "expected first column '{code_header}', found '{}'",
            headers.get(0).unwrap_or("")
        )));
    }
    let measure_code = mapping_value(columns, SourceColumn::SingleMeasureCode)?;
    let measure_label = mapping_value(columns, SourceColumn::SingleMeasureName)?;

    for result in rdr.records() {
        let record = result?;
        let code = record
            .get(0)
            .ok_or_else(|| DataError::Malformed("row has no authority code".to_string()))?;

        if !string_filter_matches(filters.areas.as_ref(), code, true, &areas.existing_names(code)) {
            continue;
        }

        let mut area = Area::new(code);
        if string_filter_matches(filters.measures.as_ref(), measure_code, false, &[]) {
            let mut measure = Measure::new(measure_code, measure_label);

            for i in 1..record.len() {
                let year_cell = headers.get(i).ok_or_else(|| {
                    DataError::Malformed(format!("row has more cells than the header ({i})"))
                })?;
                let year: u32 = year_cell.trim().parse().map_err(|_| {
                    DataError::Malformed(format!("header cell '{year_cell}' is not a year"))
                })?;

                if year_filter_matches(filters.years, year) {
                    let raw = &record[i];
                    let value: f64 = raw.trim().parse().map_err(|_| {
                        DataError::Malformed(format!("cell '{raw}' for year {year} is not numeric"))
                    })?;
                    measure.set_value(year, value);
                }
            }

            area.set_measure(measure_code, measure);
        }

        areas.set_area(code, area);
    }

    Ok(())
}

fn mapping_value(columns: &ColumnMapping, key: SourceColumn) -> DataResult<&str> {
    columns
        .get(&key)
        .map(String::as_str)
        .ok_or(DataError::MissingColumn(key))
}

#[cfg(test)]
mod tests {
    use super::populate;
    use crate::error::DataError;
    use crate::filter::{ImportFilters, build_filter_set};
    use crate::ingestion::{ColumnMapping, SourceColumn};
    use crate::model::Areas;

    fn columns() -> ColumnMapping {
        let mut cols = ColumnMapping::new();
        cols.insert(SourceColumn::AuthCode, "AuthorityCode".to_string());
        cols.insert(SourceColumn::SingleMeasureCode, "dens".to_string());
        cols.insert(SourceColumn::SingleMeasureName, "Population density".to_string());
        cols
    }

    const INPUT: &str = "\
AuthorityCode,2010,2011,2012
W06000001,68.9,69.1,69.3
W06000002,93.9,94.1,94.4
";

    #[test]
    fn imports_one_measure_per_row() {
        let mut areas = Areas::new();
        populate(&mut areas, INPUT.as_bytes(), &columns(), &ImportFilters::none()).unwrap();

        assert_eq!(areas.len(), 2);
        let measure = areas.area("W06000001").unwrap().measure("dens").unwrap();
        assert_eq!(measure.label(), "Population density");
        assert_eq!(measure.len(), 3);
        assert_eq!(measure.value(2012).unwrap(), 69.3);
    }

    #[test]
    fn wrong_first_header_cell_is_malformed() {
        let input = "Wrong,2010\nW06000001,1.0\n";
        let mut areas = Areas::new();
        let err = populate(&mut areas, input.as_bytes(), &columns(), &ImportFilters::none()).unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn mapping_must_have_exactly_three_entries() {
        let mut cols = columns();
        cols.insert(SourceColumn::Year, "Year".to_string());
        let mut areas = Areas::new();
        let err = populate(&mut areas, INPUT.as_bytes(), &cols, &ImportFilters::none()).unwrap_err();
        assert!(matches!(err, DataError::ColumnCount { expected: 3, found: 4 }));
    }

    #[test]
    fn non_numeric_cell_is_malformed() {
        let input = "AuthorityCode,2010,2011\nW06000001,68.9,\n";
        let mut areas = Areas::new();
        let err = populate(&mut areas, input.as_bytes(), &columns(), &ImportFilters::none()).unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }

    #[test]
    fn cells_under_filtered_years_are_skipped_unparsed() {
        // The 2011 cell is empty, but the year filter excludes 2011 before the
        // cell is parsed.
        let input = "AuthorityCode,2010,2011\nW06000001,68.9,\n";
        let filters = ImportFilters {
            years: Some((2010, 2010)),
            ..ImportFilters::none()
        };
        let mut areas = Areas::new();
        populate(&mut areas, input.as_bytes(), &columns(), &filters).unwrap();

        let measure = areas.area("W06000001").unwrap().measure("dens").unwrap();
        assert_eq!(measure.len(), 1);
        assert_eq!(measure.value(2010).unwrap(), 68.9);
    }

    #[test]
    fn measure_filter_rejection_still_merges_the_area() {
        let filters = ImportFilters {
            measures: build_filter_set(vec!["rail"]),
            ..ImportFilters::none()
        };
        let mut areas = Areas::new();
        populate(&mut areas, INPUT.as_bytes(), &columns(), &filters).unwrap();

        assert_eq!(areas.len(), 2);
        assert!(areas.area("W06000001").unwrap().is_empty());
    }

    #[test]
    fn area_filter_uses_names_from_earlier_imports() {
        let mut areas = Areas::new();
        let mut area = crate::model::Area::new("W06000001");
        area.set_name("eng", "Isle of Anglesey").unwrap();
        areas.set_area("W06000001", area);

        let filters = ImportFilters {
            areas: build_filter_set(vec!["anglesey"]),
            ..ImportFilters::none()
        };
        populate(&mut areas, INPUT.as_bytes(), &columns(), &filters).unwrap();

        assert!(areas.area("W06000001").unwrap().measure("dens").is_ok());
        assert!(areas.area("W06000002").is_err());
    }
}
