//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dictionary file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Formal name -> record JSON file
    #[serde(default = "default_names_path")]
    pub names: String,

    /// Canonical spelling -> variants JSON file
    #[serde(default = "default_variants_path")]
    pub variants: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            names: default_names_path(),
            variants: default_variants_path(),
        }
    }
}

fn default_names_path() -> String {
    "nickname_data.json".to_string()
}

fn default_variants_path() -> String {
    "nickname_variants.json".to_string()
}

/// Matching thresholds (percent, 0-100)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum edit-distance score for nickname hits
    #[serde(default = "default_threshold")]
    pub fuzzy_threshold: u8,

    /// Minimum score for "did you mean" suggestions
    #[serde(default = "default_threshold")]
    pub suggest_threshold: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_threshold(),
            suggest_threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> u8 {
    70
}

/// Metadata for formal names created by `add`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_century")]
    pub century: Vec<u32>,

    #[serde(default = "default_region")]
    pub region: Vec<String>,

    #[serde(default)]
    pub subregion: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            century: default_century(),
            region: default_region(),
            subregion: Vec::new(),
        }
    }
}

fn default_century() -> Vec<u32> {
    vec![20]
}

fn default_region() -> Vec<String> {
    vec!["English".to_string()]
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Line format on stderr
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            source_location: false,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable events
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

fn default_log_level() -> String {
    "warn".to_string()
}
