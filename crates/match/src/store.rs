//! Reading and writing dictionary JSON files.
//!
//! Loading is where stored records get normalized; see [`NameRecord`].
//! Saving always writes the structured shape, pretty-printed, through a
//! temporary file in the same directory so readers never see a partial file.
//!
//! [`NameRecord`]: crate::NameRecord

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::dictionary::{Dictionary, NameDictionary, VariantDictionary};
use crate::error::{MatchError, Result};
use crate::record::NameRecord;

/// Default file name for the name dictionary.
pub const NAMES_FILE: &str = "nickname_data.json";

/// Default file name for the variant dictionary.
pub const VARIANTS_FILE: &str = "nickname_variants.json";

/// Loads a name dictionary, normalizing every record.
///
/// Malformed fields are dropped one by one and logged with the formal name
/// they belong to, so saving the result never loses the rest of a record.
pub fn load_names(path: impl AsRef<Path>) -> Result<NameDictionary> {
    let raw: Dictionary<Value> = load(path.as_ref())?;
    let dict: NameDictionary = raw
        .into_iter()
        .map(|(name, value)| {
            let record = NameRecord::from_stored(Some(&name), value);
            (name, record)
        })
        .collect();
    tracing::info!(path = %path.as_ref().display(), names = dict.len(), "name dictionary loaded");
    Ok(dict)
}

/// Loads a variant dictionary.
pub fn load_variants(path: impl AsRef<Path>) -> Result<VariantDictionary> {
    let dict: VariantDictionary = load(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), groups = dict.len(), "variant dictionary loaded");
    Ok(dict)
}

/// Writes a name dictionary.
pub fn save_names(dict: &NameDictionary, path: impl AsRef<Path>) -> Result<()> {
    save(dict, path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), names = dict.len(), "name dictionary saved");
    Ok(())
}

/// Writes a variant dictionary.
pub fn save_variants(dict: &VariantDictionary, path: impl AsRef<Path>) -> Result<()> {
    save(dict, path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), groups = dict.len(), "variant dictionary saved");
    Ok(())
}

/// Parses a dictionary from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Pretty-prints a dictionary as JSON.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| MatchError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| MatchError::json(path, e))
}

fn save<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| MatchError::io(parent, e))?;

    let temp_file = NamedTempFile::new_in(parent).map_err(|e| MatchError::io(parent, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, value).map_err(|e| MatchError::json(path, e))?;
        writer.write_all(b"\n").map_err(|e| MatchError::io(path, e))?;
        writer.flush().map_err(|e| MatchError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| MatchError::io(path, e.error))?;
    Ok(())
}
