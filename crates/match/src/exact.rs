//! Exact nickname lookup.

use crate::dictionary::NameDictionary;

/// Formal names with a nickname equal to `nickname`, ignoring case.
///
/// Results follow dictionary order.
pub fn search_by_nickname(nickname: &str, dict: &NameDictionary) -> Vec<String> {
    let results: Vec<String> = dict
        .iter()
        .filter(|(_, record)| record.has_nickname_ignore_case(nickname))
        .map(|(formal_name, _)| formal_name.to_string())
        .collect();

    tracing::debug!(query = nickname, hits = results.len(), "exact match");
    results
}
