//! Parser for structured statistical records.
//!
//! The input is a JSON object with a top-level `value` array; each element is
//! one observation of one measure for one area in one year. The column mapping
//! locates the fields inside each record. Datasets either carry their measure
//! code/label per record ([`SourceColumn::MeasureCode`] /
//! [`SourceColumn::MeasureName`]) or declare a single fixed measure through
//! the mapping itself ([`SourceColumn::SingleMeasureCode`] /
//! [`SourceColumn::SingleMeasureName`]).

use std::io::Read;

use serde_json::{Map, Value};

use crate::error::{DataError, DataResult};
use crate::filter::{ImportFilters, string_filter_matches, year_filter_matches};
use crate::ingestion::{ColumnMapping, SourceColumn};
use crate::model::{Area, Areas, Measure};

/// Ingest a structured-records JSON stream into `areas`.
///
/// Filters apply independently: an area that passes the area filter is always
/// merged in, even when the measure or year filter strips its only candidate
/// measure or value. The area filter runs with enhanced matching against the
/// code, every name previously recorded for that area, and the record's own
/// candidate name.
pub(crate) fn populate<R: Read>(
    areas: &mut Areas,
    reader: R,
    columns: &ColumnMapping,
    filters: &ImportFilters,
) -> DataResult<()> {
    let root: Value = serde_json::from_reader(reader)
        .map_err(|e| DataError::Malformed(format!("invalid json: {e}")))?;
    let records = root
        .get("value")
        .and_then(Value::as_array)
        .ok_or_else(|| DataError::Malformed("missing top-level 'value' array".to_string()))?;

    for (index, record) in records.iter().enumerate() {
        let record = record.as_object().ok_or_else(|| {
            DataError::Malformed(format!("record {} is not a json object", index + 1))
        })?;

        let code = string_field(record, columns, SourceColumn::AuthCode)?;
        let area_name = string_field(record, columns, SourceColumn::AuthNameEng)?;
        let (measure_code, measure_label) = if columns.contains_key(&SourceColumn::MeasureCode) {
            (
                string_field(record, columns, SourceColumn::MeasureCode)?,
                string_field(record, columns, SourceColumn::MeasureName)?,
            )
        } else {
            (
                mapping_value(columns, SourceColumn::SingleMeasureCode)?.to_string(),
                mapping_value(columns, SourceColumn::SingleMeasureName)?.to_string(),
            )
        };
        let year = year_field(record, columns)?;
        let value = numeric_field(record, columns)?;

        // Widen the area filter's search surface with every name this area is
        // already known by, plus the record's own candidate name.
        let mut known_names = areas.existing_names(&code);
        known_names.push(area_name.clone());

        if !string_filter_matches(filters.areas.as_ref(), &code, true, &known_names) {
            continue;
        }

        let mut area = Area::new(&code);
        area.set_name("eng", &area_name)?;

        if string_filter_matches(filters.measures.as_ref(), &measure_code, false, &[]) {
            let mut measure = Measure::new(&measure_code, &measure_label);
            if year_filter_matches(filters.years, year) {
                measure.set_value(year, value);
            }
            area.set_measure(&measure_code, measure);
        }

        areas.set_area(&code, area);
    }

    Ok(())
}

fn mapping_value(columns: &ColumnMapping, key: SourceColumn) -> DataResult<&str> {
    columns
        .get(&key)
        .map(String::as_str)
        .ok_or(DataError::MissingColumn(key))
}

fn field<'a>(
    record: &'a Map<String, Value>,
    columns: &ColumnMapping,
    key: SourceColumn,
) -> DataResult<(&'a Value, &'a str)> {
    let column = mapping_value(columns, key)?;
    // Return the record's own key string so the borrow is tied to the record.
    let (name, value) = record
        .get_key_value(column)
        .ok_or_else(|| DataError::Malformed(format!("record is missing field '{column}'")))?;
    Ok((value, name.as_str()))
}

fn string_field(
    record: &Map<String, Value>,
    columns: &ColumnMapping,
    key: SourceColumn,
) -> DataResult<String> {
    let (value, column) = field(record, columns, key)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DataError::Malformed(format!("field '{column}' is not a string")))
}

/// Years arrive as string-encoded integers; a bare JSON integer is accepted
/// too.
fn year_field(record: &Map<String, Value>, columns: &ColumnMapping) -> DataResult<u32> {
    let (value, column) = field(record, columns, SourceColumn::Year)?;
    match value {
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| DataError::Malformed(format!("field '{column}' is not a year: '{s}'"))),
        other => other
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| DataError::Malformed(format!("field '{column}' is not a year"))),
    }
}

/// Readings are usually JSON numbers but occasionally arrive string-encoded;
/// fall back to parsing the string before giving up.
fn numeric_field(record: &Map<String, Value>, columns: &ColumnMapping) -> DataResult<f64> {
    let (value, column) = field(record, columns, SourceColumn::Value)?;
    if let Some(n) = value.as_f64() {
        return Ok(n);
    }
    if let Some(s) = value.as_str() {
        return s
            .trim()
            .parse()
            .map_err(|_| DataError::Malformed(format!("field '{column}' is not numeric: '{s}'")));
    }
    Err(DataError::Malformed(format!("field '{column}' is not numeric")))
}
