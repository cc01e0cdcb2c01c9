//! Ingestion formats, column mappings, and format-specific parsers.
//!
//! Callers normally go through [`crate::Areas::populate`], which dispatches on
//! [`SourceFormat`] to one of:
//!
//! - [`authority_csv`]: the authority-code table (code + English/Welsh names)
//! - [`stats_json`]: structured statistical records (one per area/measure/year)
//! - [`year_csv`]: the authority-by-year table (one fixed measure per file)
//!
//! A [`ColumnMapping`] tells each parser where to find the logical columns in
//! the concrete file.

use std::collections::HashMap;
use std::fmt;

pub mod authority_csv;
pub mod observability;
pub mod stats_json;
pub mod year_csv;

pub use observability::{FileObserver, ImportContext, ImportObserver, ImportStats, StdErrObserver};

/// Logical columns a parser may need to locate in an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceColumn {
    /// Local authority code.
    AuthCode,
    /// English name of the area.
    AuthNameEng,
    /// Welsh name of the area.
    AuthNameCym,
    /// Per-record measure codename.
    MeasureCode,
    /// Per-record measure label.
    MeasureName,
    /// Fixed measure codename for single-measure datasets (the mapping value
    /// itself is the codename, not a column header).
    SingleMeasureCode,
    /// Fixed measure label for single-measure datasets.
    SingleMeasureName,
    /// Year of the observation.
    Year,
    /// Numeric reading of the observation.
    Value,
}

impl fmt::Display for SourceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AuthCode => "authority code",
            Self::AuthNameEng => "authority name (eng)",
            Self::AuthNameCym => "authority name (cym)",
            Self::MeasureCode => "measure code",
            Self::MeasureName => "measure name",
            Self::SingleMeasureCode => "single measure code",
            Self::SingleMeasureName => "single measure name",
            Self::Year => "year",
            Self::Value => "value",
        };
        f.write_str(name)
    }
}

/// Maps logical columns to concrete field names in one input file.
pub type ColumnMapping = HashMap<SourceColumn, String>;

/// The three recognized input layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// CSV of authority codes with English and Welsh names.
    AuthorityCodeCsv,
    /// JSON with a top-level `value` array of per-observation records.
    StatsJson,
    /// CSV with one year per column and one fixed measure per file.
    AuthorityByYearCsv,
}

impl SourceFormat {
    /// Parse a format from a caller-supplied tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "authority-code-csv" => Some(Self::AuthorityCodeCsv),
            "stats-json" => Some(Self::StatsJson),
            "authority-by-year-csv" => Some(Self::AuthorityByYearCsv),
            _ => None,
        }
    }
}
