//! Add and add-variant commands - extend the dictionaries on disk

use anyhow::Result;
use nickname_cli::output::Status;
use nickname_core::Error;
use nickname_match::{add_nickname, add_variant};
use serde::Serialize;

use super::print_json;
use crate::context::Context;

#[derive(Debug, Serialize)]
struct JsonEdit<'a> {
    key: &'a str,
    value: &'a str,
    added: bool,
    file: String,
}

/// Run add command
pub fn run_add(ctx: &Context, formal_name: &str, nickname: &str) -> Result<()> {
    let formal_name = required("formal name", formal_name)?;
    let nickname = required("nickname", nickname)?;

    let mut dict = ctx.load_names_or_empty()?;
    let added = add_nickname(formal_name, nickname, &mut dict, &ctx.new_entry_defaults());
    if added {
        ctx.save_names(&dict)?;
    }

    if ctx.is_json() {
        return print_json(&JsonEdit {
            key: formal_name,
            value: nickname,
            added,
            file: ctx.names_path.display().to_string(),
        });
    }

    if added {
        Status::success(&format!("Added \"{}\" as a nickname of {}", nickname, formal_name));
    } else {
        Status::info(&format!("{} already has the nickname \"{}\"", formal_name, nickname));
    }
    Ok(())
}

/// Run add-variant command
pub fn run_add_variant(ctx: &Context, canonical: &str, variant: &str) -> Result<()> {
    let canonical = required("canonical name", canonical)?;
    let variant = required("variant", variant)?;

    let mut variants = ctx.load_variants()?;
    let added = add_variant(canonical, variant, &mut variants);
    if added {
        ctx.save_variants(&variants)?;
    }

    if ctx.is_json() {
        return print_json(&JsonEdit {
            key: canonical,
            value: variant,
            added,
            file: ctx.variants_path.display().to_string(),
        });
    }

    if added {
        Status::success(&format!("Added \"{}\" as a variant of {}", variant, canonical));
    } else {
        Status::info(&format!("{} already has the variant \"{}\"", canonical, variant));
    }
    Ok(())
}

fn required<'a>(what: &str, value: &'a str) -> nickname_core::Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input(format!("The {} must not be empty", what)));
    }
    Ok(trimmed)
}
