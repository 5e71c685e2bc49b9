//! Dictionary edits. Matching never calls these.

use crate::dictionary::{NameDictionary, VariantDictionary};
use crate::record::NameRecord;

/// Metadata given to formal names created by [`add_nickname`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntryDefaults {
    pub centuries: Vec<u32>,
    pub regions: Vec<String>,
    pub subregions: Vec<String>,
}

impl Default for NewEntryDefaults {
    fn default() -> Self {
        Self {
            centuries: vec![20],
            regions: vec!["English".to_string()],
            subregions: Vec::new(),
        }
    }
}

/// Adds `nickname` to `formal_name`, creating the entry if needed.
///
/// Existing entries keep their metadata. Returns `false` if the nickname was
/// already listed (exact comparison).
pub fn add_nickname(
    formal_name: &str,
    nickname: &str,
    dict: &mut NameDictionary,
    defaults: &NewEntryDefaults,
) -> bool {
    if let Some(record) = dict.get_mut(formal_name) {
        if record.nicknames.iter().any(|n| n == nickname) {
            return false;
        }
        record.nicknames.push(nickname.to_string());
        tracing::info!(formal_name, nickname, "nickname added");
        return true;
    }

    let record = NameRecord::with_nicknames([nickname])
        .centuries(defaults.centuries.iter().copied())
        .regions(defaults.regions.iter().cloned())
        .subregions(defaults.subregions.iter().cloned());
    dict.insert(formal_name, record);
    tracing::info!(formal_name, nickname, "formal name created");
    true
}

/// Records `variant` as an alternate spelling of `canonical`.
///
/// Returns `false` if it was already listed.
pub fn add_variant(canonical: &str, variant: &str, variants: &mut VariantDictionary) -> bool {
    let group = variants.get_or_insert_with(canonical, Vec::new);
    if group.iter().any(|v| v == variant) {
        return false;
    }
    group.push(variant.to_string());
    tracing::info!(canonical, variant, "variant added");
    true
}
