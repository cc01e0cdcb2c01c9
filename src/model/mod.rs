//! The hierarchical in-memory model: a collection of areas, each owning
//! measures, each owning a year -> value series.

mod area;
mod areas;
mod measure;

pub use area::Area;
pub use areas::Areas;
pub use measure::Measure;
