//! CLI utilities for ZIBRA support tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Score, duration and count formatting
//! - Content previews for terminal output

#![warn(missing_docs)]

pub mod output;
