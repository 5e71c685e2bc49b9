//! Soundex command - print the phonetic code of a name

use anyhow::Result;
use nickname_cli::output::Status;
use nickname_match::phonetic_code;
use serde::Serialize;

use super::print_json;
use crate::context::Context;

#[derive(Debug, Serialize)]
struct JsonCode<'a> {
    name: &'a str,
    code: Option<&'a str>,
}

/// Run soundex command
pub fn run(ctx: &Context, name: &str) -> Result<()> {
    let code = phonetic_code(name);

    if ctx.is_json() {
        return print_json(&JsonCode {
            name,
            code: code.as_deref(),
        });
    }

    match code {
        Some(code) => println!("{}", code),
        None => Status::warning(&format!("\"{}\" has no letters to encode", name)),
    }

    Ok(())
}
