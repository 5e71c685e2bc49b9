//! Search command - rank formal names for a name or nickname

use anyhow::Result;
use nickname_cli::output::{format_count, format_list, format_score, Status};
use nickname_match::{
    get_entry, smart_search, MatchCandidate, MatchSource, NameDictionary, SearchOutcome,
};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{print_json, EntryView};
use crate::context::Context;

#[derive(Debug, Serialize)]
struct JsonMatch<'a> {
    #[serde(flatten)]
    entry: EntryView<'a>,
    score: u8,
    sources: &'a [MatchSource],
    duplicate: bool,
}

#[derive(Debug, Serialize)]
struct JsonSuggestion<'a> {
    name: &'a str,
    similarity: u8,
}

#[derive(Debug, Serialize)]
struct JsonNoMatch<'a> {
    matches: Vec<JsonMatch<'a>>,
    suggestions: Vec<JsonSuggestion<'a>>,
}

/// Run search command
pub fn run(ctx: &Context, query: &str) -> Result<()> {
    nickname_telemetry::timed_span!("search", query);

    let dict = ctx.load_names()?;
    let outcome = smart_search(query, &dict, &ctx.search_options());

    if ctx.is_json() {
        return print_outcome_json(&outcome, &dict);
    }

    match &outcome {
        SearchOutcome::Matches(candidates) => print_matches(query, candidates, &dict),
        SearchOutcome::Suggestions(suggestions) => {
            Status::warning(&format!("No matches for \"{}\"", query));
            if suggestions.is_empty() {
                return Ok(());
            }
            println!();
            println!("  {}", "Did you mean:".bold());
            for (name, similarity) in suggestions {
                println!("  {}  {}", format_score(*similarity), name);
            }
        }
    }

    Ok(())
}

fn print_matches(query: &str, candidates: &[MatchCandidate], dict: &NameDictionary) {
    Status::header(&format!(
        "{} for \"{}\"",
        format_count(candidates.len(), "match", "matches"),
        query
    ));

    for candidate in candidates {
        let record = get_entry(&candidate.formal_name, dict);
        let mut line = format!(
            "  {}  {}  [{}]",
            format_score(candidate.score),
            candidate.formal_name.bold(),
            format_list(&candidate.sources)
        );
        if candidate.is_duplicate() {
            line.push_str(&format!("  {}", "cross-confirmed".cyan()));
        }
        println!("{}", line);
        println!("       {} {}", "nicknames:".dimmed(), format_list(&record.nicknames));
        println!(
            "       {} {}  {} {}",
            "century:".dimmed(),
            format_list(&record.centuries),
            "region:".dimmed(),
            format_list(&record.regions)
        );
    }
}

fn print_outcome_json(outcome: &SearchOutcome, dict: &NameDictionary) -> Result<()> {
    match outcome {
        SearchOutcome::Matches(candidates) => {
            let records: Vec<_> = candidates
                .iter()
                .map(|c| get_entry(&c.formal_name, dict))
                .collect();
            let matches: Vec<JsonMatch> = candidates
                .iter()
                .zip(&records)
                .map(|(c, record)| JsonMatch {
                    entry: EntryView::new(&c.formal_name, record),
                    score: c.score,
                    sources: &c.sources,
                    duplicate: c.is_duplicate(),
                })
                .collect();
            print_json(&matches)
        }
        SearchOutcome::Suggestions(suggestions) => print_json(&JsonNoMatch {
            matches: Vec::new(),
            suggestions: suggestions
                .iter()
                .map(|(name, similarity)| JsonSuggestion {
                    name,
                    similarity: *similarity,
                })
                .collect(),
        }),
    }
}
