//! Configuration loading and schema definitions
//!
//! Settings live in `.nickname.toml`; every key is optional.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
