//! Canonical name records and the load-time normalization of stored entries.
//!
//! Dictionary files carry two shapes for the same thing: an older bare list of
//! nicknames, and a structured object with metadata. Both deserialize straight
//! into [`NameRecord`], so nothing downstream ever inspects the stored shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::NameDictionary;

/// One formal name and everything known about it.
///
/// Every field is always present; missing data is an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct NameRecord {
    /// Informal variants, e.g. "Bill" for "William"
    pub nicknames: Vec<String>,
    /// Centuries the name was in use (20 = 1900s)
    #[serde(rename = "century")]
    pub centuries: Vec<u32>,
    /// Cultural or linguistic regions, e.g. "English"
    #[serde(rename = "region")]
    pub regions: Vec<String>,
    /// Finer-grained regions
    #[serde(rename = "subregion")]
    pub subregions: Vec<String>,
}

impl NameRecord {
    /// Creates a record holding only nicknames.
    pub fn with_nicknames<I, S>(nicknames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nicknames: dedup_in_order(nicknames.into_iter().map(Into::into)),
            ..Self::default()
        }
    }

    /// Sets the centuries.
    pub fn centuries(mut self, centuries: impl IntoIterator<Item = u32>) -> Self {
        self.centuries = dedup_in_order(centuries);
        self
    }

    /// Sets the regions.
    pub fn regions<S: Into<String>>(mut self, regions: impl IntoIterator<Item = S>) -> Self {
        self.regions = dedup_in_order(regions.into_iter().map(Into::into));
        self
    }

    /// Sets the subregions.
    pub fn subregions<S: Into<String>>(mut self, subregions: impl IntoIterator<Item = S>) -> Self {
        self.subregions = dedup_in_order(subregions.into_iter().map(Into::into));
        self
    }

    /// Returns true if any nickname equals `query` ignoring case.
    pub fn has_nickname_ignore_case(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.nicknames.iter().any(|n| n.to_lowercase() == query)
    }
}

impl From<Value> for NameRecord {
    fn from(value: Value) -> Self {
        NameRecord::from_stored(None, value)
    }
}

impl NameRecord {
    /// Normalizes one stored entry, accepting every shape found in
    /// dictionary files:
    ///
    /// - a bare list of nicknames (`"William": ["Will", "Bill"]`)
    /// - an object with `nicknames`, `century`, `region` and `subregion`
    /// - anything else, which carries no usable data
    ///
    /// A bad field only costs that field: a single value stands for a
    /// one-element list, and list elements of the wrong type are skipped.
    /// Whatever is dropped is logged at warn level under `name`.
    pub(crate) fn from_stored(name: Option<&str>, value: Value) -> Self {
        let name = name.unwrap_or("<unnamed>");
        match value {
            Value::Null => NameRecord::default(),
            Value::Object(mut fields) => {
                let mut take = |field: &str| fields.remove(field).unwrap_or(Value::Null);
                let nicknames = take("nicknames");
                let century = take("century");
                let region = take("region");
                let subregion = take("subregion");
                NameRecord::with_nicknames(lenient_list(name, "nicknames", nicknames, as_string))
                    .centuries(lenient_list(name, "century", century, as_century))
                    .regions(lenient_list(name, "region", region, as_string))
                    .subregions(lenient_list(name, "subregion", subregion, as_string))
            }
            value @ (Value::Array(_) | Value::String(_)) => {
                NameRecord::with_nicknames(lenient_list(name, "nicknames", value, as_string))
            }
            other => {
                tracing::warn!(name, value = %other, "unrecognized dictionary entry, treating as empty");
                NameRecord::default()
            }
        }
    }
}

/// Elements of `value` that `convert` accepts. Null is an empty list and a
/// lone value is a list of one.
fn lenient_list<T>(
    name: &str,
    field: &str,
    value: Value,
    convert: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    let items = match value {
        Value::Null => return Vec::new(),
        Value::Array(items) => items,
        single => vec![single],
    };

    let mut kept = Vec::with_capacity(items.len());
    for item in &items {
        match convert(item) {
            Some(v) => kept.push(v),
            None => tracing::warn!(name, field, value = %item, "dropping invalid value"),
        }
    }
    kept
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(String::from)
}

fn as_century(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|c| u32::try_from(c).ok())
}

/// Normalized record for `formal_name`.
///
/// Tries the exact key first, then the first key equal ignoring case. An
/// unknown name yields an empty record rather than an error.
pub fn get_entry(formal_name: &str, dict: &NameDictionary) -> NameRecord {
    dict.get(formal_name)
        .or_else(|| dict.find_ignore_case(formal_name).map(|(_, record)| record))
        .cloned()
        .unwrap_or_default()
}

fn dedup_in_order<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
