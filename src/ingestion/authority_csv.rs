//! Parser for the authority-code table.
//!
//! A CSV whose header declares the column layout and whose rows carry an
//! authority code followed by English and Welsh names:
//!
//! ```csv
//! Local authority code,Name (eng),Name (cym)
//! W06000001,Isle of Anglesey,Ynys Mon
//! ```

use std::collections::HashSet;
use std::io::Read;

use crate::error::{DataError, DataResult};
use crate::filter::string_filter_matches;
use crate::ingestion::ColumnMapping;
use crate::model::{Area, Areas};

/// Ingest an authority-code CSV into `areas`.
///
/// Rules:
///
/// - The header row's column count must equal the mapping size.
/// - Each data row needs at least three fields: code, English name, Welsh name.
/// - The area filter is evaluated with enhanced (substring) matching against
///   the code and both candidate names.
pub(crate) fn populate<R: Read>(
    areas: &mut Areas,
    reader: R,
    columns: &ColumnMapping,
    area_filter: Option<&HashSet<String>>,
) -> DataResult<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(DataError::Malformed("missing header row".to_string()));
    }
    if headers.len() != columns.len() {
        return Err(DataError::ColumnCount {
            expected: columns.len(),
            found: headers.len(),
        });
    }

    for result in rdr.records() {
        let record = result?;
        if record.len() < 3 {
            return Err(DataError::Malformed(format!(
                "row has {} fields, expected at least 3",
                record.len()
            )));
        }

        let code = &record[0];
        let english = &record[1];
        let welsh = &record[2];
        let candidate_names = [english.to_string(), welsh.to_string()];

        if string_filter_matches(area_filter, code, true, &candidate_names) {
            let mut area = Area::new(code);
            area.set_name("eng", english)?;
            area.set_name("cym", welsh)?;
            areas.set_area(code, area);
        }
    }

    Ok(())
}
