//! Registry of known dataset descriptors.
//!
//! Each [`Dataset`] bundles the dataset code a caller selects it by, the file
//! it ships as, the [`SourceFormat`] to parse it with, and the column mapping
//! its parser needs.

use crate::ingestion::{ColumnMapping, SourceColumn, SourceFormat};

/// A dataset known to the loader.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Short lowercase code used to select the dataset.
    pub code: String,
    /// File name relative to the data directory.
    pub file: String,
    /// Parser to use.
    pub format: SourceFormat,
    /// Where the parser finds its logical columns.
    pub columns: ColumnMapping,
}

fn mapping(entries: &[(SourceColumn, &str)]) -> ColumnMapping {
    entries
        .iter()
        .map(|(key, value)| (*key, value.to_string()))
        .collect()
}

/// Column mapping for the authority-code table.
pub fn authority_code_columns() -> ColumnMapping {
    mapping(&[
        (SourceColumn::AuthCode, "Local authority code"),
        (SourceColumn::AuthNameEng, "Name (eng)"),
        (SourceColumn::AuthNameCym, "Name (cym)"),
    ])
}

/// The statistical datasets the loader knows about.
pub fn datasets() -> Vec<Dataset> {
    vec![
        Dataset {
            code: "popden".to_string(),
            file: "popu1009.json".to_string(),
            format: SourceFormat::StatsJson,
            columns: mapping(&[
                (SourceColumn::AuthCode, "Localauthority_Code"),
                (SourceColumn::AuthNameEng, "Localauthority_ItemName_ENG"),
                (SourceColumn::MeasureCode, "Measure_Code"),
                (SourceColumn::MeasureName, "Measure_ItemName_ENG"),
                (SourceColumn::Year, "Year_Code"),
                (SourceColumn::Value, "Data"),
            ]),
        },
        Dataset {
            code: "biz".to_string(),
            file: "econ0080.json".to_string(),
            format: SourceFormat::StatsJson,
            columns: mapping(&[
                (SourceColumn::AuthCode, "Area_Code"),
                (SourceColumn::AuthNameEng, "Area_ItemName_ENG"),
                (SourceColumn::MeasureCode, "Variable_Code"),
                (SourceColumn::MeasureName, "Variable_ItemName_ENG"),
                (SourceColumn::Year, "Year_Code"),
                (SourceColumn::Value, "Data"),
            ]),
        },
        Dataset {
            code: "aqi".to_string(),
            file: "envi0201.json".to_string(),
            format: SourceFormat::StatsJson,
            columns: mapping(&[
                (SourceColumn::AuthCode, "LocalAuthority_Code"),
                (SourceColumn::AuthNameEng, "LocalAuthority_ItemName_ENG"),
                (SourceColumn::Year, "Year_Code"),
                (SourceColumn::Value, "Data"),
                (SourceColumn::SingleMeasureCode, "no2"),
                (SourceColumn::SingleMeasureName, "Nitrogen Dioxide"),
            ]),
        },
        Dataset {
            code: "trains".to_string(),
            file: "tran0152.json".to_string(),
            format: SourceFormat::StatsJson,
            columns: mapping(&[
                (SourceColumn::AuthCode, "LocalAuthority_Code"),
                (SourceColumn::AuthNameEng, "LocalAuthority_ItemName_ENG"),
                (SourceColumn::Year, "Year_Code"),
                (SourceColumn::Value, "Data"),
                (SourceColumn::SingleMeasureCode, "rail"),
                (SourceColumn::SingleMeasureName, "Rail passenger journeys"),
            ]),
        },
        Dataset {
            code: "complete-popden".to_string(),
            file: "complete-popu1009-popden.csv".to_string(),
            format: SourceFormat::AuthorityByYearCsv,
            columns: mapping(&[
                (SourceColumn::AuthCode, "AuthorityCode"),
                (SourceColumn::SingleMeasureCode, "dens"),
                (SourceColumn::SingleMeasureName, "Population density"),
            ]),
        },
        Dataset {
            code: "complete-pop".to_string(),
            file: "complete-popu1009-pop.csv".to_string(),
            format: SourceFormat::AuthorityByYearCsv,
            columns: mapping(&[
                (SourceColumn::AuthCode, "AuthorityCode"),
                (SourceColumn::SingleMeasureCode, "pop"),
                (SourceColumn::SingleMeasureName, "Population"),
            ]),
        },
    ]
}

/// Look up a dataset by code (case-insensitive).
pub fn find(code: &str) -> Option<Dataset> {
    let code = code.to_lowercase();
    datasets().into_iter().find(|d| d.code == code)
}
