//! Response language selection.

use serde::{Deserialize, Serialize};

/// Languages the assistant can answer in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Supported language codes
    #[serde(default = "default_supported")]
    pub supported: Vec<String>,

    /// Language used when the user's preference is unsupported
    #[serde(default = "default_language")]
    pub default: String,

    /// Notice shown when falling back to the default language
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            supported: default_supported(),
            default: default_language(),
            fallback_message: default_fallback_message(),
        }
    }
}

fn default_supported() -> Vec<String> {
    ["en", "en-NG", "en-SIMPLE", "es", "fr", "pt"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_fallback_message() -> String {
    "If your preferred language is not yet available, I'll respond in English. \
We're working on adding more language options."
        .to_string()
}

impl LanguageConfig {
    /// Returns true if `code` is supported (exact match).
    pub fn supports(&self, code: &str) -> bool {
        self.supported.iter().any(|s| s == code)
    }
}

/// Picks the response language from the user's profile setting.
///
/// The device language is accepted but not consulted yet.
pub fn detect_user_language<'a>(
    config: &'a LanguageConfig,
    profile_language: Option<&'a str>,
    _device_language: Option<&str>,
) -> &'a str {
    match profile_language {
        Some(code) if config.supports(code) => code,
        _ => &config.default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_profile_language() {
        let config = LanguageConfig::default();
        assert_eq!(detect_user_language(&config, Some("en-NG"), None), "en-NG");
    }

    #[test]
    fn test_unsupported_falls_back() {
        let config = LanguageConfig::default();
        assert_eq!(detect_user_language(&config, Some("de"), Some("fr")), "en");
        assert_eq!(detect_user_language(&config, None, Some("fr")), "en");
    }

    #[test]
    fn test_exact_match_only() {
        let config = LanguageConfig::default();
        assert!(!config.supports("EN"));
    }
}
