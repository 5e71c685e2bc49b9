//! Autocomplete command - formal names spelled like the input

use anyhow::Result;
use nickname_cli::output::{format_score, Status};
use nickname_match::suggest_close_names;

use super::print_json;
use crate::context::Context;

/// Run autocomplete command
pub fn run(ctx: &Context, prefix: &str, threshold: Option<u8>) -> Result<()> {
    let dict = ctx.load_names()?;
    let threshold = threshold.unwrap_or(ctx.config.schema.matching.suggest_threshold);
    let suggestions = suggest_close_names(prefix, &dict, threshold);

    if ctx.is_json() {
        // Names only, best first
        let names: Vec<&str> = suggestions.iter().map(|(name, _)| name.as_str()).collect();
        return print_json(&names);
    }

    if suggestions.is_empty() {
        Status::warning(&format!("No formal names close to \"{}\"", prefix));
        return Ok(());
    }

    for (name, similarity) in &suggestions {
        println!("{}  {}", format_score(*similarity), name);
    }

    Ok(())
}
