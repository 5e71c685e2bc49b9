//! Merging matcher results into one ranked candidate list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::dictionary::NameDictionary;
use crate::exact::search_by_nickname;
use crate::fuzzy::{fuzzy_hits, HitKind, DEFAULT_THRESHOLD, EXACT_MATCH_SCORE};
use crate::phonetic::{search_by_soundex, PHONETIC_MATCH_SCORE};

/// Which matcher found a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchSource {
    /// A nickname equals the query
    Exact,
    /// Substring or edit-distance hit on a nickname
    #[serde(rename = "Fuzzy/Partial")]
    FuzzyPartial,
    /// The formal name sounds like the query
    Soundex,
}

impl MatchSource {
    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSource::Exact => "Exact",
            MatchSource::FuzzyPartial => "Fuzzy/Partial",
            MatchSource::Soundex => "Soundex",
        }
    }
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A formal name proposed for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The matched formal name
    pub formal_name: String,
    /// Best score any matcher gave it (0-100)
    pub score: u8,
    /// Matchers that found it, in the order they found it
    pub sources: Vec<MatchSource>,
}

impl MatchCandidate {
    /// Creates a candidate found by a single matcher.
    pub fn new(formal_name: impl Into<String>, score: u8, source: MatchSource) -> Self {
        Self {
            formal_name: formal_name.into(),
            score,
            sources: vec![source],
        }
    }

    /// Found by more than one matcher.
    pub fn is_duplicate(&self) -> bool {
        self.sources.len() > 1
    }
}

/// Candidates keyed by formal name, kept in first-touched order.
#[derive(Default)]
struct CandidateSet {
    candidates: Vec<MatchCandidate>,
    index: HashMap<String, usize>,
}

impl CandidateSet {
    fn touch(&mut self, formal_name: &str, score: u8, source: Option<MatchSource>) {
        match self.index.get(formal_name) {
            Some(&pos) => {
                let candidate = &mut self.candidates[pos];
                candidate.score = candidate.score.max(score);
                if let Some(source) = source {
                    if !candidate.sources.contains(&source) {
                        candidate.sources.push(source);
                    }
                }
            }
            None => {
                self.index.insert(formal_name.to_string(), self.candidates.len());
                self.candidates.push(MatchCandidate {
                    formal_name: formal_name.to_string(),
                    score,
                    sources: source.into_iter().collect(),
                });
            }
        }
    }

    fn into_ranked(mut self) -> Vec<MatchCandidate> {
        self.candidates.sort_by(|a, b| b.score.cmp(&a.score));
        self.candidates
    }
}

/// Ranked candidates for `query` from all three matchers.
///
/// Runs exact, fuzzy (partial mode) and Soundex matching in that order and
/// keeps one candidate per formal name with its best score. A fuzzy hit that
/// is just the nickname equal to the query is credited to `Exact` only.
/// Sorted by score, highest first; ties in the order names were first found.
pub fn best_guess_matches(query: &str, dict: &NameDictionary) -> Vec<MatchCandidate> {
    best_guess_matches_with_threshold(query, dict, DEFAULT_THRESHOLD)
}

/// [`best_guess_matches`] with a custom fuzzy threshold.
pub fn best_guess_matches_with_threshold(
    query: &str,
    dict: &NameDictionary,
    fuzzy_threshold: u8,
) -> Vec<MatchCandidate> {
    let mut set = CandidateSet::default();

    for formal_name in search_by_nickname(query, dict) {
        set.touch(&formal_name, EXACT_MATCH_SCORE, Some(MatchSource::Exact));
    }

    for hit in fuzzy_hits(query, dict, fuzzy_threshold, true) {
        let source = match hit.kind {
            HitKind::Equal => None,
            HitKind::Partial | HitKind::Distance => Some(MatchSource::FuzzyPartial),
        };
        set.touch(&hit.formal_name, hit.score, source);
    }

    for formal_name in search_by_soundex(query, dict) {
        set.touch(&formal_name, PHONETIC_MATCH_SCORE, Some(MatchSource::Soundex));
    }

    let ranked = set.into_ranked();
    tracing::debug!(query, candidates = ranked.len(), "best guess");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameRecord;
    use proptest::prelude::*;

    fn william() -> NameDictionary {
        let mut dict = NameDictionary::new();
        dict.insert(
            "William",
            NameRecord::with_nicknames(["Will", "Bill", "Liam"])
                .centuries([20])
                .regions(["English"]),
        );
        dict
    }

    fn sample() -> NameDictionary {
        let mut dict = william();
        dict.insert("Robert", NameRecord::with_nicknames(["Rob", "Bob", "Bobby"]));
        dict.insert("Rupert", NameRecord::with_nicknames(["Rupe"]));
        dict.insert("Katherine", NameRecord::with_nicknames(["Kate", "Katie", "Kathy"]));
        dict.insert("Catherine", NameRecord::with_nicknames(["Cathy", "Cate"]));
        dict
    }

    #[test]
    fn test_exact_only() {
        assert_eq!(
            best_guess_matches("Bill", &william()),
            vec![MatchCandidate::new("William", 100, MatchSource::Exact)]
        );
    }

    #[test]
    fn test_partial_substring() {
        let results = best_guess_matches("Wil", &william());
        assert!(results.contains(&MatchCandidate::new("William", 70, MatchSource::FuzzyPartial)));
    }

    #[test]
    fn test_soundex_only() {
        let results = best_guess_matches("Robbert", &sample());
        assert_eq!(results[0].formal_name, "Robert");
        assert_eq!(results[0].score, 65);
        assert_eq!(results[0].sources, vec![MatchSource::Soundex]);
        assert!(results.iter().any(|c| c.formal_name == "Rupert"));
    }

    #[test]
    fn test_cross_confirmed_keeps_max_and_order() {
        // "Jonn" is inside "Jonny" and shares J500 with "Jon".
        let mut dict = NameDictionary::new();
        dict.insert("Jon", NameRecord::with_nicknames(["Jonny"]));
        let results = best_guess_matches("Jonn", &dict);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 70);
        assert_eq!(results[0].sources, vec![MatchSource::FuzzyPartial, MatchSource::Soundex]);
        assert!(results[0].is_duplicate());
    }

    #[test]
    fn test_no_candidates_is_empty() {
        assert!(best_guess_matches("Xyzzy", &sample()).is_empty());
        assert!(best_guess_matches("", &sample()).is_empty());
    }

    #[test]
    fn test_partial_repeats_collapse() {
        let results = best_guess_matches("kat", &sample());
        let katherine: Vec<_> = results.iter().filter(|c| c.formal_name == "Katherine").collect();
        assert_eq!(katherine.len(), 1);
        assert_eq!(katherine[0].sources, vec![MatchSource::FuzzyPartial]);
    }

    #[test]
    fn test_source_serializes_with_slash() {
        let json = serde_json::to_string(&MatchSource::FuzzyPartial).unwrap();
        assert_eq!(json, "\"Fuzzy/Partial\"");
        assert_eq!(MatchSource::FuzzyPartial.to_string(), "Fuzzy/Partial");
    }

    proptest! {
        #[test]
        fn prop_unique_and_ranked(query in "[A-Za-z]{0,8}") {
            let results = best_guess_matches(&query, &sample());

            let mut names: Vec<_> = results.iter().map(|c| c.formal_name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), results.len());

            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }

            for candidate in &results {
                let mut sources = candidate.sources.clone();
                sources.dedup();
                prop_assert_eq!(sources.len(), candidate.sources.len());
                prop_assert!(!candidate.sources.is_empty());
            }
        }

        #[test]
        fn prop_score_is_max_contribution(query in "[A-Za-z]{1,8}") {
            let dict = sample();
            let results = best_guess_matches(&query, &dict);
            let exact = search_by_nickname(&query, &dict);
            let fuzzy = crate::fuzzy_match(&query, &dict, DEFAULT_THRESHOLD, true);
            let phonetic = search_by_soundex(&query, &dict);

            for candidate in &results {
                let mut best = 0u8;
                if exact.contains(&candidate.formal_name) {
                    best = best.max(EXACT_MATCH_SCORE);
                }
                for (name, score) in &fuzzy {
                    if *name == candidate.formal_name {
                        best = best.max(*score);
                    }
                }
                if phonetic.contains(&candidate.formal_name) {
                    best = best.max(PHONETIC_MATCH_SCORE);
                }
                prop_assert_eq!(candidate.score, best);
            }
        }
    }
}
