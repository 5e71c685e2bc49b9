//! Search with a "did you mean" fallback.

use crate::aggregate::{best_guess_matches_with_threshold, MatchCandidate};
use crate::dictionary::NameDictionary;
use crate::fuzzy::{suggest_close_names, DEFAULT_THRESHOLD};

/// Thresholds used by [`smart_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Minimum edit-distance score for nickname hits
    pub fuzzy_threshold: u8,
    /// Minimum score for "did you mean" suggestions
    pub suggest_threshold: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_THRESHOLD,
            suggest_threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// What a search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Ranked candidates from all matchers
    Matches(Vec<MatchCandidate>),
    /// Nothing matched at all; close formal names with their similarity
    Suggestions(Vec<(String, u8)>),
}

impl SearchOutcome {
    /// Candidates, if the search found any.
    pub fn candidates(&self) -> &[MatchCandidate] {
        match self {
            SearchOutcome::Matches(c) => c,
            SearchOutcome::Suggestions(_) => &[],
        }
    }
}

/// Look up `query`, suggesting close formal names when nothing matches.
///
/// The ranked matchers already include Soundex, so a separate sound-alike
/// pass would never find anything they missed.
pub fn smart_search(query: &str, dict: &NameDictionary, options: &SearchOptions) -> SearchOutcome {
    let matches = best_guess_matches_with_threshold(query, dict, options.fuzzy_threshold);
    if !matches.is_empty() {
        return SearchOutcome::Matches(matches);
    }

    tracing::debug!(query, "no matches, suggesting close names");
    SearchOutcome::Suggestions(suggest_close_names(query, dict, options.suggest_threshold))
}
