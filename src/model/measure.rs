//! A single named statistic with a sparse year -> value series.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DataError, DataResult};

/// A named metric observed across years (e.g. population density).
///
/// The codename is normalized to lowercase on construction and never changes
/// afterwards; the label is free-form and replaceable. Values are stored at
/// most once per year and iterate in ascending year order.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    codename: String,
    label: String,
    values: BTreeMap<u32, f64>,
}

impl Measure {
    /// Create a measure with no values.
    pub fn new(codename: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            codename: codename.into().to_lowercase(),
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    /// The lowercased codename.
    pub fn codename(&self) -> &str {
        &self.codename
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the human-readable label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Upsert the value for a year, replacing any existing reading.
    pub fn set_value(&mut self, year: u32, value: f64) {
        self.values.insert(year, value);
    }

    /// The value recorded for `year`.
    pub fn value(&self, year: u32) -> DataResult<f64> {
        self.values
            .get(&year)
            .copied()
            .ok_or_else(|| DataError::NotFound(format!("no value found for year {year}")))
    }

    /// All values, keyed by year in ascending order.
    pub fn values(&self) -> &BTreeMap<u32, f64> {
        &self.values
    }

    /// Number of years with a recorded value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Change from the chronologically first to the last value, or `0.0` when
    /// fewer than two values exist.
    pub fn difference(&self) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }
        match (self.values.values().next(), self.values.values().next_back()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// [`Self::difference`] as a percentage of the first value, or `0.0` when
    /// fewer than two values exist.
    ///
    /// A first value of exactly zero yields an infinite or NaN result; callers
    /// that care should check the first value themselves.
    pub fn difference_as_percentage(&self) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }
        match self.values.values().next() {
            Some(first) => self.difference() / first * 100.0,
            None => 0.0,
        }
    }

    /// Arithmetic mean of all values, or `0.0` when empty.
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.values().sum::<f64>() / self.values.len() as f64
    }

    /// Merge `other` into `self` with `other` taking precedence: the label is
    /// overwritten unconditionally and every year/value pair is upserted.
    pub fn merge_from(&mut self, other: &Measure) {
        self.label = other.label.clone();
        for (&year, &value) in &other.values {
            self.set_value(year, value);
        }
    }
}

/// Renders `<label> (<codename>)` followed by a right-aligned table of years
/// plus `Average`, `Diff.`, and `% Diff.` columns, or `<no data>` when empty.
impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.label, self.codename)?;

        if self.values.is_empty() {
            return write!(f, "<no data>");
        }

        let mut columns: Vec<(String, String)> = self
            .values
            .iter()
            .map(|(year, value)| (year.to_string(), format!("{value:.6}")))
            .collect();
        columns.push(("Average".to_string(), format!("{:.6}", self.average())));
        columns.push(("Diff.".to_string(), format!("{:.6}", self.difference())));
        columns.push((
            "% Diff.".to_string(),
            format!("{:.6}", self.difference_as_percentage()),
        ));

        let mut headings = String::new();
        let mut readings = String::new();
        for (i, (heading, reading)) in columns.iter().enumerate() {
            if i > 0 {
                headings.push(' ');
                readings.push(' ');
            }
            let width = heading.len().max(reading.len());
            headings.push_str(&format!("{heading:>width$}"));
            readings.push_str(&format!("{reading:>width$}"));
        }

        write!(f, "{headings}\n{readings}")
    }
}
