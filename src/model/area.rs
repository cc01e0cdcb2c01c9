//! A geographic area: an authority code, multilingual names, and measures.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use crate::error::{DataError, DataResult};
use crate::model::Measure;

/// A geographic entity identified by a local authority code.
///
/// Names are keyed by three-letter lowercased language codes; measures are
/// keyed by lowercased codenames. Both maps hold at most one entry per key and
/// iterate in ascending key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    local_authority_code: String,
    names: BTreeMap<String, String>,
    measures: BTreeMap<String, Measure>,
}

impl Area {
    /// Create an area with no names or measures.
    pub fn new(local_authority_code: impl Into<String>) -> Self {
        Self {
            local_authority_code: local_authority_code.into(),
            names: BTreeMap::new(),
            measures: BTreeMap::new(),
        }
    }

    /// The authority code given at construction.
    pub fn local_authority_code(&self) -> &str {
        &self.local_authority_code
    }

    /// Set the area's name for a language.
    ///
    /// The language code must be exactly three alphabetic characters and is
    /// stored lowercased; any existing name for that language is replaced.
    pub fn set_name(&mut self, lang: &str, name: impl Into<String>) -> DataResult<()> {
        if lang.len() != 3 || !lang.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DataError::InvalidLanguageCode(lang.to_string()));
        }
        self.names.insert(lang.to_lowercase(), name.into());
        Ok(())
    }

    /// The area's name in a language (case-insensitive lookup).
    pub fn name(&self, lang: &str) -> DataResult<&str> {
        let lang = lang.to_lowercase();
        self.names
            .get(&lang)
            .map(String::as_str)
            .ok_or_else(|| DataError::NotFound(format!("no name found for language '{lang}'")))
    }

    /// All names, keyed by lowercased language code.
    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    /// Attach a measure under a codename (lowercased before storing).
    ///
    /// If a measure already exists under that codename the incoming one is
    /// merged into it with the incoming side taking precedence; otherwise it
    /// is inserted fresh. Never fails.
    pub fn set_measure(&mut self, codename: &str, measure: Measure) {
        match self.measures.entry(codename.to_lowercase()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge_from(&measure),
            Entry::Vacant(slot) => {
                slot.insert(measure);
            }
        }
    }

    /// The measure stored under a codename (case-insensitive lookup).
    pub fn measure(&self, codename: &str) -> DataResult<&Measure> {
        let codename = codename.to_lowercase();
        self.measures
            .get(&codename)
            .ok_or_else(|| DataError::NotFound(format!("no measure found matching '{codename}'")))
    }

    /// All measures, keyed by lowercased codename in ascending order.
    pub fn measures(&self) -> &BTreeMap<String, Measure> {
        &self.measures
    }

    /// Number of measures attached to this area.
    pub fn len(&self) -> usize {
        self.measures.len()
    }

    /// Whether no measures are attached.
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// Merge `other` into `self` with `other` taking precedence: every name
    /// replaces any same-language name and every measure is attached via
    /// [`Self::set_measure`] (so same-codename measures merge recursively).
    pub fn merge_from(&mut self, other: &Area) {
        // Keys in `other` were normalized by set_name, so insert directly.
        for (lang, name) in &other.names {
            self.names.insert(lang.clone(), name.clone());
        }
        for (codename, measure) in &other.measures {
            self.set_measure(codename, measure.clone());
        }
    }
}

/// Renders `<english> / <welsh> (<code>)` (falling back to whichever name is
/// present, or `Unnamed`), then each measure block in codename order separated
/// by blank lines, or `<no measures>` when there are none.
impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let english = self.names.get("eng");
        let welsh = self.names.get("cym");
        let title = match (english, welsh) {
            (Some(eng), Some(cym)) => format!("{eng} / {cym}"),
            (Some(eng), None) => eng.clone(),
            (None, Some(cym)) => cym.clone(),
            (None, None) => "Unnamed".to_string(),
        };
        writeln!(f, "{title} ({})", self.local_authority_code)?;

        if self.measures.is_empty() {
            return write!(f, "<no measures>");
        }
        let blocks: Vec<String> = self.measures.values().map(ToString::to_string).collect();
        write!(f, "{}", blocks.join("\n\n"))
    }
}
