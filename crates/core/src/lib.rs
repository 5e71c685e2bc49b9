//! Core utilities for the nickname tools
//!
//! This crate provides shared functionality used by the CLI:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//!
//! # Example
//!
//! ```rust,no_run
//! use nickname_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("names file: {}", config.schema.data.names);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
