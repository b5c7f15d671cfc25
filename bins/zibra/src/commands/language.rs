//! Language command - resolve the reply language

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use zibra_core::config::Config;
use zibra_search::detect_user_language;

#[derive(Debug, Serialize)]
struct JsonLanguageOutput<'a> {
    language: &'a str,
    supported: &'a [String],
    profile: Option<&'a str>,
    device: Option<&'a str>,
}

/// Run language command
pub fn run(
    config: &Config,
    profile: Option<&str>,
    device: Option<&str>,
    format: &str,
) -> Result<()> {
    let languages = &config.schema.language;
    let language = detect_user_language(languages, profile, device);

    if format == "json" {
        let output = JsonLanguageOutput {
            language,
            supported: &languages.supported,
            profile,
            device,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", language.bold());
    if profile.is_some_and(|p| p != language) {
        println!("{}", languages.fallback_message.dimmed());
    }

    Ok(())
}
