//! Shared state for commands: configuration, data paths, output format.

use clap::ValueEnum;
use nickname_core::config::Config;
use nickname_core::{Error, ErrorCode, Result};
use nickname_match::{
    store, MatchError, NameDictionary, NewEntryDefaults, SearchOptions, VariantDictionary,
};
use std::path::{Path, PathBuf};

/// Output format for every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct Context {
    pub config: Config,
    pub names_path: PathBuf,
    pub variants_path: PathBuf,
    pub format: OutputFormat,
}

impl Context {
    /// Command-line paths win over the configured ones.
    pub fn new(
        config: Config,
        names: Option<PathBuf>,
        variants: Option<PathBuf>,
        format: OutputFormat,
    ) -> Self {
        let names_path = names.unwrap_or_else(|| PathBuf::from(&config.schema.data.names));
        let variants_path = variants.unwrap_or_else(|| PathBuf::from(&config.schema.data.variants));
        Self {
            config,
            names_path,
            variants_path,
            format,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn load_names(&self) -> Result<NameDictionary> {
        store::load_names(&self.names_path).map_err(|e| dictionary_error(&self.names_path, e))
    }

    /// Like [`load_names`](Self::load_names), but a missing file is an empty dictionary.
    pub fn load_names_or_empty(&self) -> Result<NameDictionary> {
        match store::load_names(&self.names_path) {
            Err(e) if e.is_not_found() => {
                tracing::info!(path = %self.names_path.display(), "starting a new name dictionary");
                Ok(NameDictionary::new())
            }
            other => other.map_err(|e| dictionary_error(&self.names_path, e)),
        }
    }

    /// Variants are optional; a missing file means no variant groups.
    pub fn load_variants(&self) -> Result<VariantDictionary> {
        match store::load_variants(&self.variants_path) {
            Err(e) if e.is_not_found() => {
                tracing::warn!(path = %self.variants_path.display(), "variant file not found, continuing without variants");
                Ok(VariantDictionary::new())
            }
            other => other.map_err(|e| dictionary_error(&self.variants_path, e)),
        }
    }

    pub fn save_names(&self, dict: &NameDictionary) -> Result<()> {
        store::save_names(dict, &self.names_path).map_err(|e| dictionary_error(&self.names_path, e))
    }

    pub fn save_variants(&self, dict: &VariantDictionary) -> Result<()> {
        store::save_variants(dict, &self.variants_path)
            .map_err(|e| dictionary_error(&self.variants_path, e))
    }

    pub fn search_options(&self) -> SearchOptions {
        let matching = &self.config.schema.matching;
        SearchOptions {
            fuzzy_threshold: matching.fuzzy_threshold,
            suggest_threshold: matching.suggest_threshold,
        }
    }

    pub fn new_entry_defaults(&self) -> NewEntryDefaults {
        let defaults = &self.config.schema.defaults;
        NewEntryDefaults {
            centuries: defaults.century.clone(),
            regions: defaults.region.clone(),
            subregions: defaults.subregion.clone(),
        }
    }
}

fn dictionary_error(path: &Path, err: MatchError) -> Error {
    if err.is_not_found() {
        return Error::dictionary_not_found(path).with_source(err);
    }
    match err {
        MatchError::Json { .. } | MatchError::JsonValue(_) => {
            Error::new(ErrorCode::DictionaryParseError, err.to_string()).with_source(err)
        }
        MatchError::Io { .. } => Error::dictionary(err.to_string()).with_source(err),
    }
}
