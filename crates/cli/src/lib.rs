//! CLI utilities for the nickname tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Score and list formatting

#![warn(missing_docs)]

pub mod output;
