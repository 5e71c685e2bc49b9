//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used if none exists.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };
        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let mut candidates: Vec<PathBuf> = [".nickname.toml", "nickname.toml", ".config/nickname.toml"]
        .iter()
        .map(PathBuf::from)
        .collect();
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("nickname").join("config.toml"));
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.exists())
        .map(|p| p.to_string_lossy().into_owned())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path))?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("Failed to parse config file {}", path))
    })
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    let matching = &schema.matching;
    for (key, value) in [
        ("matching.fuzzy_threshold", matching.fuzzy_threshold),
        ("matching.suggest_threshold", matching.suggest_threshold),
    ] {
        if value > 100 {
            return Err(Error::invalid_config_value(
                key,
                format!("{} is not a percentage (0-100)", value),
            ));
        }
    }
    Ok(())
}
