//! nickname - formal names from nicknames
//!
//! Looks up the formal names behind a nickname ("Bill" -> "William") using
//! exact, fuzzy and phonetic matching over a JSON name dictionary, and keeps
//! that dictionary and its spelling variants up to date.

use clap::{Parser, Subcommand};
use nickname_cli::output::Status;
use nickname_core::config::{Config, LogFormat};
use nickname_core::error::exit_codes;
use nickname_match::MetadataFilter;
use nickname_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use context::{Context, OutputFormat};

/// Nickname to formal-name lookup
#[derive(Parser)]
#[command(name = "nickname")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_override_self = true)]
struct Cli {
    /// Configuration file (defaults to .nickname.toml discovery)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Name dictionary JSON file
    #[arg(long, global = true)]
    names: Option<PathBuf>,

    /// Spelling variants JSON file
    #[arg(long, global = true)]
    variants: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every nickname of a formal name, including its spelling variants
    Nicknames {
        /// Formal name, e.g. "William"
        name: String,
    },

    /// Find formal names for a name or nickname
    Search {
        /// Name or nickname to look up
        query: String,
    },

    /// Suggest formal names spelled like the input
    Autocomplete {
        /// Partial or misspelled formal name
        prefix: String,

        /// Minimum similarity (0-100), overrides the configured value
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: Option<u8>,
    },

    /// List formal names by century, region and subregion
    Filter {
        /// Century the name was in use (20 = 1900s)
        #[arg(long)]
        century: Option<u32>,

        /// Region, e.g. "English"
        #[arg(long)]
        region: Option<String>,

        /// Subregion
        #[arg(long)]
        subregion: Option<String>,
    },

    /// Add a nickname to a formal name, creating the name if needed
    Add {
        /// Formal name
        formal_name: String,

        /// Nickname to add
        nickname: String,
    },

    /// Record an alternate spelling of a formal name
    AddVariant {
        /// Canonical spelling
        canonical: String,

        /// Alternate spelling
        variant: String,
    },

    /// Print the Soundex code of a name
    Soundex {
        /// Name to encode
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = match e.downcast_ref::<nickname_core::Error>() {
                Some(err) => {
                    if format == OutputFormat::Json {
                        if let Ok(json) = serde_json::to_string_pretty(&err.to_report()) {
                            eprintln!("{}", json);
                        }
                    } else {
                        Status::error(&err.to_string());
                    }
                    err.code.exit_code()
                }
                None => {
                    Status::error(&format!("{:#}", e));
                    exit_codes::FAILURE
                }
            };
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let logging = &config.schema.logging;
    let level = if cli.verbose {
        "nickname=debug,nickname_match=debug".to_string()
    } else {
        logging.level.clone()
    };
    nickname_telemetry::init_with_config(TelemetryConfig {
        log_level: level,
        json: logging.format == LogFormat::Json,
        show_target: cli.verbose,
        show_file: logging.source_location,
        show_line_number: logging.source_location,
    })?;

    let ctx = Context::new(config, cli.names, cli.variants, cli.format);
    tracing::debug!(
        names = %ctx.names_path.display(),
        variants = %ctx.variants_path.display(),
        "dictionary paths"
    );

    match cli.command {
        Commands::Nicknames { name } => commands::nicknames::run(&ctx, &name),
        Commands::Search { query } => commands::search::run(&ctx, &query),
        Commands::Autocomplete { prefix, threshold } => {
            commands::autocomplete::run(&ctx, &prefix, threshold)
        }
        Commands::Filter { century, region, subregion } => commands::filter::run(
            &ctx,
            MetadataFilter {
                century,
                region,
                subregion,
            },
        ),
        Commands::Add { formal_name, nickname } => {
            commands::edit::run_add(&ctx, &formal_name, &nickname)
        }
        Commands::AddVariant { canonical, variant } => {
            commands::edit::run_add_variant(&ctx, &canonical, &variant)
        }
        Commands::Soundex { name } => commands::soundex::run(&ctx, &name),
    }
}
