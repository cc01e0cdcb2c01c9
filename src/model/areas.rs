//! The top-level store of areas: merge-by-precedence, ingestion dispatch, and
//! JSON export.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::io::Read;

use serde::Serialize;

use crate::error::{DataError, DataResult};
use crate::filter::ImportFilters;
use crate::ingestion::{self, ColumnMapping, SourceFormat};
use crate::model::Area;

/// All imported areas, keyed by authority code in ascending order.
///
/// The collection only grows: importing merges into existing entries and no
/// deletion operation exists. Re-importing the same dataset is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Areas {
    areas: BTreeMap<String, Area>,
}

impl Areas {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an area under `code`.
    ///
    /// If an area already exists under that code the incoming one is merged
    /// into it with the incoming side taking precedence at every level;
    /// otherwise it is inserted fresh. Never fails.
    pub fn set_area(&mut self, code: &str, area: Area) {
        match self.areas.entry(code.to_string()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge_from(&area),
            Entry::Vacant(slot) => {
                slot.insert(area);
            }
        }
    }

    /// The area stored under `code`.
    pub fn area(&self, code: &str) -> DataResult<&Area> {
        self.areas
            .get(code)
            .ok_or_else(|| DataError::NotFound(format!("no area found matching '{code}'")))
    }

    /// Number of stored areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Iterate areas in ascending authority-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Area)> {
        self.areas.iter().map(|(code, area)| (code.as_str(), area))
    }

    /// All names already recorded for an area, or empty if the area is
    /// unknown. Used to widen the search surface of the enhanced area filter.
    pub(crate) fn existing_names(&self, code: &str) -> Vec<String> {
        self.areas
            .get(code)
            .map(|area| area.names().values().cloned().collect())
            .unwrap_or_default()
    }

    /// Ingest one input stream into the collection.
    ///
    /// Dispatches on `format` to the matching parser in [`crate::ingestion`].
    /// `columns` maps the logical columns to the file's concrete field names;
    /// `filters` restricts which areas, measures, and years are kept.
    ///
    /// A parse error aborts this call but leaves everything merged before the
    /// failing record in place; there is no rollback.
    pub fn populate<R: Read>(
        &mut self,
        reader: R,
        format: SourceFormat,
        columns: &ColumnMapping,
        filters: &ImportFilters,
    ) -> DataResult<()> {
        match format {
            SourceFormat::AuthorityCodeCsv => {
                ingestion::authority_csv::populate(self, reader, columns, filters.areas.as_ref())
            }
            SourceFormat::StatsJson => ingestion::stats_json::populate(self, reader, columns, filters),
            SourceFormat::AuthorityByYearCsv => {
                ingestion::year_csv::populate(self, reader, columns, filters)
            }
        }
    }

    /// Export the collection as a JSON string.
    ///
    /// Shape: `{ <code>: { "names": {lang: name}, "measures": {codename:
    /// {year: value}} } }`, with years as decimal strings. Measures with no
    /// values are omitted, as is the `"measures"` key when nothing remains.
    /// An empty collection exports as `{}`.
    pub fn to_json(&self) -> DataResult<String> {
        #[derive(Serialize)]
        struct AreaExport<'a> {
            names: &'a BTreeMap<String, String>,
            #[serde(skip_serializing_if = "BTreeMap::is_empty")]
            measures: BTreeMap<&'a str, BTreeMap<String, f64>>,
        }

        let export: BTreeMap<&str, AreaExport<'_>> = self
            .areas
            .iter()
            .map(|(code, area)| {
                let measures = area
                    .measures()
                    .iter()
                    .filter(|(_, measure)| !measure.is_empty())
                    .map(|(codename, measure)| {
                        let values = measure
                            .values()
                            .iter()
                            .map(|(year, value)| (year.to_string(), *value))
                            .collect();
                        (codename.as_str(), values)
                    })
                    .collect();
                (code.as_str(), AreaExport { names: area.names(), measures })
            })
            .collect();

        Ok(serde_json::to_string(&export)?)
    }
}

/// Renders each area block in ascending authority-code order separated by
/// blank lines, or `<no areas>` when the collection is empty.
impl fmt::Display for Areas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.areas.is_empty() {
            return write!(f, "<no areas>");
        }
        let blocks: Vec<String> = self.areas.values().map(ToString::to_string).collect();
        write!(f, "{}", blocks.join("\n\n"))
    }
}
