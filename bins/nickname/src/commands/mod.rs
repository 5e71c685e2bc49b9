//! CLI command implementations

pub mod autocomplete;
pub mod edit;
pub mod filter;
pub mod nicknames;
pub mod search;
pub mod soundex;

use nickname_match::NameRecord;
use serde::Serialize;

/// A formal name with its metadata, as printed by several commands.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub name: &'a str,
    pub nicknames: Vec<String>,
    pub century: &'a [u32],
    pub region: &'a [String],
    pub subregion: &'a [String],
}

impl<'a> EntryView<'a> {
    pub fn new(name: &'a str, record: &'a NameRecord) -> Self {
        Self {
            name,
            nicknames: record.nicknames.clone(),
            century: &record.centuries,
            region: &record.regions,
            subregion: &record.subregions,
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
