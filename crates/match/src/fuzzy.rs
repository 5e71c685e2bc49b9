//! Fuzzy matching algorithms.
//!
//! Scores are integer percentages derived from Levenshtein distance:
//! `100 * (1 - distance / max_len)`, rounded.

use crate::dictionary::NameDictionary;

/// Minimum score kept by the fuzzy matcher and the suggester by default.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Score reported when the query is a substring of a nickname.
pub const PARTIAL_MATCH_SCORE: u8 = 70;

/// Score reported when the query equals a nickname.
pub const EXACT_MATCH_SCORE: u8 = 100;

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity of two strings as a percentage (0-100).
///
/// Case-sensitive; callers lowercase first. Two empty strings are identical.
pub fn similarity_ratio(a: &str, b: &str) -> u8 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein_distance(a, b);
    let similarity = 1.0 - distance as f64 / max_len as f64;
    (similarity * 100.0).round() as u8
}

/// How a fuzzy hit was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HitKind {
    /// Nickname equals the query ignoring case
    Equal,
    /// Query is a substring of the nickname
    Partial,
    /// Edit-distance ratio at or above the threshold
    Distance,
}

#[derive(Debug, Clone)]
pub(crate) struct FuzzyHit {
    pub formal_name: String,
    pub score: u8,
    pub kind: HitKind,
}

/// Raw fuzzy hits in dictionary order, before sorting.
///
/// A nickname equal to the query settles the formal name at 100 and nothing
/// else is scored for it. Otherwise every nickname is scored on its own, so
/// one formal name may produce several hits.
pub(crate) fn fuzzy_hits(
    query: &str,
    dict: &NameDictionary,
    threshold: u8,
    partial_match: bool,
) -> Vec<FuzzyHit> {
    let query = query.to_lowercase();
    let mut hits = Vec::new();

    for (formal_name, record) in dict.iter() {
        let nicknames: Vec<String> = record.nicknames.iter().map(|n| n.to_lowercase()).collect();

        if nicknames.iter().any(|n| *n == query) {
            hits.push(FuzzyHit {
                formal_name: formal_name.to_string(),
                score: EXACT_MATCH_SCORE,
                kind: HitKind::Equal,
            });
            continue;
        }

        for nickname in &nicknames {
            if partial_match && !query.is_empty() && nickname.contains(&query) {
                hits.push(FuzzyHit {
                    formal_name: formal_name.to_string(),
                    score: PARTIAL_MATCH_SCORE,
                    kind: HitKind::Partial,
                });
                continue;
            }

            let score = similarity_ratio(&query, nickname);
            if score >= threshold {
                hits.push(FuzzyHit {
                    formal_name: formal_name.to_string(),
                    score,
                    kind: HitKind::Distance,
                });
            }
        }
    }

    hits
}

/// Score every nickname against `query` and keep those at or above `threshold`.
///
/// With `partial_match`, a query contained in a nickname scores exactly
/// [`PARTIAL_MATCH_SCORE`] for that nickname. A formal name can appear more
/// than once; see [`best_guess_matches`](crate::best_guess_matches) for the
/// collapsed view. Sorted by score, highest first, ties in dictionary order.
///
/// An empty query is never treated as a substring of a nickname, so it does
/// not hit every formal name at [`PARTIAL_MATCH_SCORE`].
pub fn fuzzy_match(
    query: &str,
    dict: &NameDictionary,
    threshold: u8,
    partial_match: bool,
) -> Vec<(String, u8)> {
    let mut results: Vec<(String, u8)> = fuzzy_hits(query, dict, threshold, partial_match)
        .into_iter()
        .map(|hit| (hit.formal_name, hit.score))
        .collect();

    results.sort_by(|a, b| b.1.cmp(&a.1));
    tracing::debug!(query, threshold, partial_match, hits = results.len(), "fuzzy match");
    results
}

/// [`fuzzy_match`] with the default threshold.
pub fn search_by_nickname_strength(
    nickname: &str,
    dict: &NameDictionary,
    partial_match: bool,
) -> Vec<(String, u8)> {
    fuzzy_match(nickname, dict, DEFAULT_THRESHOLD, partial_match)
}

/// Formal names that look like `name`, for "did you mean" prompts.
///
/// Compares against the formal names themselves, not nicknames.
pub fn suggest_close_names(name: &str, dict: &NameDictionary, threshold: u8) -> Vec<(String, u8)> {
    let name = name.to_lowercase();
    let mut suggestions: Vec<(String, u8)> = dict
        .keys()
        .filter_map(|key| {
            let score = similarity_ratio(&name, &key.to_lowercase());
            (score >= threshold).then(|| (key.to_string(), score))
        })
        .collect();

    suggestions.sort_by(|a, b| b.1.cmp(&a.1));
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameRecord;
    use proptest::prelude::*;

    fn sample() -> NameDictionary {
        let mut dict = NameDictionary::new();
        dict.insert("William", NameRecord::with_nicknames(["Will", "Bill", "Liam"]));
        dict.insert("Robert", NameRecord::with_nicknames(["Rob", "Bob", "Bobby"]));
        dict.insert("Katherine", NameRecord::with_nicknames(["Kate", "Katie", "Kathy"]));
        dict
    }

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_levenshtein_insert() {
        assert_eq!(levenshtein_distance("helo", "hello"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_ratio_values() {
        assert_eq!(similarity_ratio("bill", "will"), 75);
        assert_eq!(similarity_ratio("jon", "john"), 75);
        assert_eq!(similarity_ratio("abc", "xyz"), 0);
        assert_eq!(similarity_ratio("", ""), 100);
    }

    #[test]
    fn test_ratio_counts_chars_not_bytes() {
        assert_eq!(similarity_ratio("zoë", "zoe"), 67);
    }

    #[test]
    fn test_stored_nickname_scores_100() {
        let results = search_by_nickname_strength("bobby", &sample(), false);
        assert_eq!(results[0], ("Robert".to_string(), 100));
    }

    #[test]
    fn test_exact_settles_the_formal_name() {
        // "Will" would score 75 against "bill", but the exact hit wins outright.
        let results = search_by_nickname_strength("Bill", &sample(), true);
        assert_eq!(results, vec![("William".to_string(), 100)]);
    }

    #[test]
    fn test_partial_scores_exactly_70() {
        let results = search_by_nickname_strength("Wil", &sample(), true);
        assert_eq!(results, vec![("William".to_string(), 70)]);
    }

    #[test]
    fn test_partial_disabled_uses_ratio() {
        // "wil" vs "will": 1 edit over 4 chars.
        let results = search_by_nickname_strength("Wil", &sample(), false);
        assert_eq!(results, vec![("William".to_string(), 75)]);
    }

    #[test]
    fn test_partial_may_repeat_formal_name() {
        // "kat" is inside Kate, Katie and Kathy.
        let results = search_by_nickname_strength("kat", &sample(), true);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|(name, score)| name == "Katherine" && *score == 70));
    }

    #[test]
    fn test_threshold_filters() {
        let results = fuzzy_match("Rab", &sample(), 90, false);
        assert!(results.is_empty());
        let results = fuzzy_match("Rab", &sample(), 60, false);
        assert_eq!(results, vec![("Robert".to_string(), 67)]);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let mut dict = NameDictionary::new();
        dict.insert("Jonathan", NameRecord::with_nicknames(["Jon"]));
        dict.insert("John", NameRecord::with_nicknames(["Jonny", "Jan"]));
        dict.insert("Johan", NameRecord::with_nicknames(["Joh"]));
        let results = fuzzy_match("Jo", &dict, 60, false);
        assert_eq!(
            results,
            vec![
                ("Jonathan".to_string(), 67),
                ("Johan".to_string(), 67),
            ]
        );
    }

    #[test]
    fn test_empty_query_is_not_a_substring_hit() {
        assert!(search_by_nickname_strength("", &sample(), true).is_empty());
    }

    #[test]
    fn test_suggest_close_names() {
        let suggestions = suggest_close_names("Wiliam", &sample(), DEFAULT_THRESHOLD);
        assert_eq!(suggestions, vec![("William".to_string(), 86)]);
    }

    #[test]
    fn test_suggest_ignores_nicknames() {
        assert!(suggest_close_names("Bobby", &sample(), DEFAULT_THRESHOLD).is_empty());
    }

    proptest! {
        #[test]
        fn prop_ratio_identity(s in "[a-zA-Z]{0,12}") {
            prop_assert_eq!(similarity_ratio(&s, &s), 100);
        }

        #[test]
        fn prop_ratio_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            prop_assert_eq!(similarity_ratio(&a, &b), similarity_ratio(&b, &a));
        }

        #[test]
        fn prop_ratio_in_range(a in "\\PC{0,10}", b in "\\PC{0,10}") {
            prop_assert!(similarity_ratio(&a, &b) <= 100);
        }

        #[test]
        fn prop_more_edits_never_score_higher(base in "[a-z]{6,10}") {
            // Replace characters one at a time with a letter not in the alphabet above.
            let chars: Vec<char> = base.chars().collect();
            let mut last = 100;
            for edits in 1..=chars.len() {
                let edited: String = chars
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| if i < edits { '#' } else { c })
                    .collect();
                let score = similarity_ratio(&base, &edited);
                prop_assert!(score <= last);
                last = score;
            }
        }
    }
}
