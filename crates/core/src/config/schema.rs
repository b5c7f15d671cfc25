//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zibra_search::{LanguageConfig, SearchOptions};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Corpus file locations
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Help search bounds
    #[serde(default)]
    pub search: SearchConfig,

    /// Reply language settings
    #[serde(default)]
    pub language: LanguageConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(Error::config_invalid("search.max_results must be at least 1")
                .with_suggestion("Remove the key to use the default of 8"));
        }

        if !self.language.supports(&self.language.default) {
            return Err(Error::config_invalid(format!(
                "language.default '{}' is not in language.supported",
                self.language.default
            )));
        }

        Ok(())
    }
}

/// Where corpora are loaded from. Unset paths use the bundled samples.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorpusConfig {
    /// Support template corpus (TOML or JSON)
    #[serde(default)]
    pub templates: Option<PathBuf>,

    /// Help center corpus (TOML or JSON)
    #[serde(default)]
    pub help: Option<PathBuf>,
}

/// Help search result bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum relevant results
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Results returned when nothing is relevant
    #[serde(default = "default_fallback_results")]
    pub fallback_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            fallback_results: default_fallback_results(),
        }
    }
}

impl SearchConfig {
    /// Convert to engine options
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            max_results: self.max_results,
            fallback_results: self.fallback_results,
        }
    }
}

fn default_max_results() -> usize {
    zibra_search::ranking::DEFAULT_MAX_RESULTS
}

fn default_fallback_results() -> usize {
    zibra_search::ranking::DEFAULT_FALLBACK_RESULTS
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter; RUST_LOG takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.search.to_options(), SearchOptions::default());
        assert_eq!(schema.language.default, "en");
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_sections_serialize() {
        let value = serde_json::to_value(ConfigSchema::default()).unwrap();
        for section in ["corpus", "search", "language", "logging"] {
            assert!(value.get(section).is_some(), "missing [{}]", section);
        }
        assert_eq!(value["search"]["max_results"], 8);
    }

    #[test]
    fn test_partial_file() {
        let schema: ConfigSchema = toml::from_str(
            r#"
[search]
max_results = 5

[logging]
json = true
"#,
        )
        .unwrap();

        assert_eq!(schema.search.max_results, 5);
        assert_eq!(schema.search.fallback_results, 3);
        assert!(schema.logging.json);
        assert_eq!(schema.logging.level, "warn");
        assert!(schema.corpus.templates.is_none());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let mut schema = ConfigSchema::default();
        schema.search.max_results = 0;
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_unsupported_default_language_rejected() {
        let mut schema = ConfigSchema::default();
        schema.language.default = "de".to_string();
        assert!(schema.validate().is_err());
    }
}
