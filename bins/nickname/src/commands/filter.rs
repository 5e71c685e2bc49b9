//! Filter command - formal names by century, region and subregion

use anyhow::Result;
use nickname_cli::output::{format_count, format_list, Status};
use nickname_match::{filter_by_metadata, MetadataFilter, NameRecord};
use owo_colors::OwoColorize;
use std::collections::BTreeMap;

use super::print_json;
use crate::context::Context;

/// Run filter command
pub fn run(ctx: &Context, filter: MetadataFilter) -> Result<()> {
    let dict = ctx.load_names()?;
    let filtered = filter_by_metadata(&dict, &filter);

    // Sorted by formal name for stable output
    let sorted: BTreeMap<&str, &NameRecord> = filtered.iter().collect();

    if ctx.is_json() {
        return print_json(&sorted);
    }

    if filter.is_unconstrained() {
        Status::info("No constraints given, listing every formal name");
    }

    if sorted.is_empty() {
        Status::warning("No formal names match the given constraints");
        return Ok(());
    }

    Status::header(&format_count(sorted.len(), "formal name", "formal names"));
    for (name, record) in &sorted {
        println!(
            "  {}  {}",
            name.bold(),
            format_list(&record.nicknames).dimmed()
        );
    }

    Ok(())
}
