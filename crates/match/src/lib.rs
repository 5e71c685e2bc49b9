//! Nickname to formal-name matching.
//!
//! This crate provides:
//! - Exact, case-insensitive nickname lookup
//! - Levenshtein-ratio fuzzy matching with substring hits
//! - Soundex matching on formal names
//! - A ranked, source-tagged merge of all three
//! - Era/region filtering and variant-spelling expansion
//! - JSON dictionary loading (with record normalization) and saving
//!
//! # Example
//!
//! ```
//! use nickname_match::{best_guess_matches, MatchSource, NameDictionary, NameRecord};
//!
//! let mut dict = NameDictionary::new();
//! dict.insert("William", NameRecord::with_nicknames(["Will", "Bill", "Liam"]));
//!
//! let results = best_guess_matches("Bill", &dict);
//! assert_eq!(results[0].formal_name, "William");
//! assert_eq!(results[0].score, 100);
//! assert_eq!(results[0].sources, vec![MatchSource::Exact]);
//! ```
//!
//! All matching functions take the dictionary by shared reference and never
//! modify it.

mod aggregate;
mod dictionary;
mod edit;
mod error;
mod exact;
mod fuzzy;
mod metadata;
mod phonetic;
mod record;
mod search;
mod variants;

pub mod store;

pub use aggregate::{best_guess_matches, best_guess_matches_with_threshold, MatchCandidate, MatchSource};
pub use dictionary::{Dictionary, NameDictionary, VariantDictionary};
pub use edit::{add_nickname, add_variant, NewEntryDefaults};
pub use error::{MatchError, Result};
pub use exact::search_by_nickname;
pub use fuzzy::{
    fuzzy_match, levenshtein_distance, search_by_nickname_strength, similarity_ratio,
    suggest_close_names, DEFAULT_THRESHOLD, EXACT_MATCH_SCORE, PARTIAL_MATCH_SCORE,
};
pub use metadata::{filter_by_metadata, filter_nicknames_by_metadata, MetadataFilter};
pub use phonetic::{phonetic_code, search_by_soundex, PHONETIC_MATCH_SCORE};
pub use record::{get_entry, NameRecord};
pub use search::{smart_search, SearchOptions, SearchOutcome};
pub use variants::get_nicknames;
