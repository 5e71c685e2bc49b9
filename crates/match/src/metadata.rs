//! Filtering dictionaries by era and region.

use crate::dictionary::NameDictionary;
use crate::record::NameRecord;

/// Era/region constraints. `None` (or a blank string) means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFilter {
    pub century: Option<u32>,
    pub region: Option<String>,
    pub subregion: Option<String>,
}

impl MetadataFilter {
    /// Returns true if no constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.century.is_none() && active(&self.region).is_none() && active(&self.subregion).is_none()
    }

    /// Returns true if `record` satisfies every set constraint.
    pub fn matches(&self, record: &NameRecord) -> bool {
        if let Some(century) = self.century {
            if !record.centuries.contains(&century) {
                return false;
            }
        }
        if let Some(region) = active(&self.region) {
            if !contains_ignore_case(&record.regions, region) {
                return false;
            }
        }
        if let Some(subregion) = active(&self.subregion) {
            if !contains_ignore_case(&record.subregions, subregion) {
                return false;
            }
        }
        true
    }
}

fn active(constraint: &Option<String>) -> Option<&str> {
    constraint.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ignore_case(values: &[String], wanted: &str) -> bool {
    let wanted = wanted.to_lowercase();
    values.iter().any(|v| v.to_lowercase() == wanted)
}

/// New dictionary holding the entries of `dict` that satisfy `filter`.
///
/// Order is preserved and `dict` is left untouched.
pub fn filter_by_metadata(dict: &NameDictionary, filter: &MetadataFilter) -> NameDictionary {
    let filtered: NameDictionary = dict
        .iter()
        .filter(|(_, record)| filter.matches(record))
        .map(|(name, record)| (name, record.clone()))
        .collect();

    tracing::debug!(?filter, kept = filtered.len(), total = dict.len(), "metadata filter");
    filtered
}

/// [`filter_by_metadata`] taking each constraint separately.
pub fn filter_nicknames_by_metadata(
    dict: &NameDictionary,
    century: Option<u32>,
    region: Option<&str>,
    subregion: Option<&str>,
) -> NameDictionary {
    let filter = MetadataFilter {
        century,
        region: region.map(String::from),
        subregion: subregion.map(String::from),
    };
    filter_by_metadata(dict, &filter)
}
