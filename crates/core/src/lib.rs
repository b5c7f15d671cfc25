//! Core utilities for the ZIBRA support tools
//!
//! This crate provides shared functionality used by the CLI and services
//! embedding the matching engine:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use zibra_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! println!("Returning at most {} help articles", config.schema.search.max_results);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{exit_codes, Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}

#[cfg(test)]
mod tests {
    use crate::{exit_codes, Error};

    #[test]
    fn test_root_exports_exit_codes() {
        let err = Error::config_invalid("search.max_results must be at least 1");
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(exit_codes::SUCCESS, 0);
    }
}
