//! Configuration loading and schema definitions
//!
//! One TOML file covers corpus locations, search bounds, language and
//! logging. Every section is optional.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
