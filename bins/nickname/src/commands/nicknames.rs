//! Nicknames command - list nicknames for a formal name and its spellings

use anyhow::Result;
use nickname_cli::output::{format_count, format_list, Status};
use nickname_match::{get_entry, get_nicknames};
use owo_colors::OwoColorize;

use super::{print_json, EntryView};
use crate::context::Context;

/// Run nicknames command
pub fn run(ctx: &Context, name: &str) -> Result<()> {
    let dict = ctx.load_names()?;
    let variants = ctx.load_variants()?;

    let nicknames = get_nicknames(name, &dict, &variants);
    let record = get_entry(name, &dict);

    let mut view = EntryView::new(name, &record);
    view.nicknames = nicknames;

    if ctx.is_json() {
        return print_json(&view);
    }

    if view.nicknames.is_empty() {
        Status::warning(&format!("No nicknames found for \"{}\"", name));
        return Ok(());
    }

    Status::header(&format!(
        "{} ({})",
        name,
        format_count(view.nicknames.len(), "nickname", "nicknames")
    ));
    for nickname in &view.nicknames {
        println!("  {} {}", "•".dimmed(), nickname);
    }
    println!();
    println!("  {} {}", "century:".dimmed(), format_list(view.century));
    println!("  {} {}", "region:".dimmed(), format_list(view.region));
    println!("  {} {}", "subregion:".dimmed(), format_list(view.subregion));

    Ok(())
}
