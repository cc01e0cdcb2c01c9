//! Batch import of datasets from a data directory.
//!
//! [`load_datasets`] is deliberately infallible: each dataset that fails to
//! open or parse is reported to the [`ImportObserver`] and the run continues
//! with the next dataset, keeping whatever was merged before the failure.

use std::path::Path;

use crate::catalogue::{self, Dataset};
use crate::error::{DataError, DataResult};
use crate::filter::ImportFilters;
use crate::ingestion::{ImportContext, ImportObserver, ImportStats, SourceFormat};
use crate::model::Areas;
use crate::source::{InputFile, InputSource};

/// Resolve requested dataset codes against the catalogue.
///
/// An empty list (or any `"all"` entry, case-insensitive) selects every known
/// dataset; an unknown code fails with a lookup error.
pub fn select_datasets(codes: &[String]) -> DataResult<Vec<Dataset>> {
    if codes.is_empty() || codes.iter().any(|c| c.eq_ignore_ascii_case("all")) {
        return Ok(catalogue::datasets());
    }

    codes
        .iter()
        .map(|code| {
            catalogue::find(code)
                .ok_or_else(|| DataError::NotFound(format!("no dataset matches code '{code}'")))
        })
        .collect()
}

/// Load the authority-code table (`areas.csv`) from `dir`.
pub fn load_authority_codes(areas: &mut Areas, dir: &Path, filters: &ImportFilters) -> DataResult<()> {
    let file = InputFile::new(dir.join("areas.csv"));
    areas.populate(
        file.open()?,
        SourceFormat::AuthorityCodeCsv,
        &catalogue::authority_code_columns(),
        filters,
    )
}

/// Import every dataset in `datasets` from `dir`, reporting each outcome.
///
/// Never propagates an error: a dataset that cannot be opened or parsed is
/// reported through `observer` and the remaining datasets are still imported.
pub fn load_datasets(
    areas: &mut Areas,
    dir: &Path,
    datasets: &[Dataset],
    filters: &ImportFilters,
    observer: &dyn ImportObserver,
) {
    for dataset in datasets {
        let path = dir.join(&dataset.file);
        let ctx = ImportContext {
            source: path.display().to_string(),
            format: dataset.format,
        };

        let result = InputFile::new(&path)
            .open()
            .and_then(|reader| areas.populate(reader, dataset.format, &dataset.columns, filters));

        match result {
            Ok(()) => observer.on_success(&ctx, ImportStats { areas: areas.len() }),
            Err(error) => observer.on_failure(&ctx, &error),
        }
    }
}
