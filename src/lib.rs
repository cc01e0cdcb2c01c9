//! `area-stats` ingests tabular and JSON statistical datasets describing
//! geographic areas into a unified in-memory model, and supports filtered
//! import, printing, and JSON export.
//!
//! The model is hierarchical: an [`Areas`] collection owns [`Area`] entries
//! keyed by local authority code; each area owns [`Measure`]s keyed by
//! lowercased codename; each measure holds a sparse year -> value series.
//! Importing always *merges*: re-importing a dataset is a no-op, and when two
//! records describe the same area or measure the later record's fields win on
//! key collisions.
//!
//! ## What you can ingest
//!
//! Three layouts, selected by [`ingestion::SourceFormat`]:
//!
//! - **Authority-code CSV**: one row per area with its code and English/Welsh
//!   names.
//! - **Structured statistics JSON**: a top-level `value` array with one record
//!   per area/measure/year observation.
//! - **Authority-by-year CSV**: one fixed measure per file, one year per
//!   column, one area per row.
//!
//! A [`ingestion::ColumnMapping`] tells the parser where each logical column
//! lives in the concrete file, and [`filter::ImportFilters`] restricts which
//! areas, measures, and years are kept during import.
//!
//! ## Quick example
//!
//! ```
//! use area_stats::filter::ImportFilters;
//! use area_stats::ingestion::{ColumnMapping, SourceColumn, SourceFormat};
//! use area_stats::Areas;
//!
//! # fn main() -> Result<(), area_stats::DataError> {
//! let input = "\
//! Local authority code,Name (eng),Name (cym)
//! W06000001,Isle of Anglesey,Ynys Mon
//! ";
//!
//! let mut columns = ColumnMapping::new();
//! columns.insert(SourceColumn::AuthCode, "Local authority code".to_string());
//! columns.insert(SourceColumn::AuthNameEng, "Name (eng)".to_string());
//! columns.insert(SourceColumn::AuthNameCym, "Name (cym)".to_string());
//!
//! let mut areas = Areas::new();
//! areas.populate(
//!     input.as_bytes(),
//!     SourceFormat::AuthorityCodeCsv,
//!     &columns,
//!     &ImportFilters::none(),
//! )?;
//!
//! assert_eq!(areas.len(), 1);
//! assert_eq!(areas.area("W06000001")?.name("eng")?, "Isle of Anglesey");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`model`]: the area/measure data model and the top-level [`Areas`] store
//! - [`ingestion`]: formats, column mappings, parsers, and import observers
//! - [`filter`]: import filters and their evaluators
//! - [`catalogue`]: descriptors for the known datasets
//! - [`loader`]: batch import that logs per-dataset failures and continues
//! - [`source`]: byte-stream sources (file-backed input)
//! - [`error`]: the error type used across the crate

pub mod catalogue;
pub mod error;
pub mod filter;
pub mod ingestion;
pub mod loader;
pub mod model;
pub mod source;

pub use error::{DataError, DataResult};
pub use model::{Area, Areas, Measure};
