//! Import filters and their pure evaluators.
//!
//! Each filter is independently optional: `None` and an empty set both mean
//! "no restriction". The year filter additionally treats `(0, 0)` as the
//! "no restriction" sentinel.

use std::collections::HashSet;

/// Caller-supplied restrictions applied during ingestion.
#[derive(Debug, Clone, Default)]
pub struct ImportFilters {
    /// Area codes (or, with enhanced matching, name fragments) to keep.
    pub areas: Option<HashSet<String>>,
    /// Measure codenames to keep.
    pub measures: Option<HashSet<String>>,
    /// Inclusive year range to keep; `(0, 0)` keeps every year.
    pub years: Option<(u32, u32)>,
}

impl ImportFilters {
    /// Filters that restrict nothing.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Whether `candidate` passes a string-set filter.
///
/// An absent or empty filter passes everything. Otherwise the candidate must
/// equal some entry case-insensitively; with `enhanced` set, an entry that is
/// a case-insensitive substring of the candidate or of any string in `extra`
/// also passes.
pub fn string_filter_matches(
    filter: Option<&HashSet<String>>,
    candidate: &str,
    enhanced: bool,
    extra: &[String],
) -> bool {
    let Some(set) = filter else {
        return true;
    };
    if set.is_empty() {
        return true;
    }

    let candidate = candidate.to_lowercase();
    for entry in set {
        let entry = entry.to_lowercase();
        if entry == candidate {
            return true;
        }
        if enhanced {
            if candidate.contains(&entry) {
                return true;
            }
            if extra.iter().any(|s| s.to_lowercase().contains(&entry)) {
                return true;
            }
        }
    }
    false
}

/// Whether `year` passes a year-range filter.
///
/// An absent filter or the `(0, 0)` sentinel passes everything; otherwise the
/// test is the inclusive two-sided bound `low <= year <= high`.
pub fn year_filter_matches(filter: Option<(u32, u32)>, year: u32) -> bool {
    match filter {
        None | Some((0, 0)) => true,
        Some((low, high)) => year >= low && year <= high,
    }
}

/// Build a string-set filter from raw values.
///
/// Returns `None` (no restriction) when the input is empty or any entry is
/// `"all"` (case-insensitive); otherwise the deduplicated set.
pub fn build_filter_set<I, S>(values: I) -> Option<HashSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let set: HashSet<String> = values.into_iter().map(Into::into).collect();
    if set.is_empty() || set.iter().any(|v| v.eq_ignore_ascii_case("all")) {
        None
    } else {
        Some(set)
    }
}
