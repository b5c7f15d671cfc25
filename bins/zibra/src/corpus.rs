//! Corpus loading: configured files or the bundled samples

use std::path::{Path, PathBuf};
use zibra_core::config::Config;
use zibra_core::{Error, Result, ResultExt};
use zibra_search::{HelpCenter, SupportAssistant};

const BUNDLED_TEMPLATES: &str = include_str!("../data/templates.toml");
const BUNDLED_HELP: &str = include_str!("../data/help.toml");

/// Source text and how to parse it
enum Source {
    Toml(String),
    Json(String),
}

/// Load the support template corpus
pub fn load_assistant(config: &Config) -> Result<SupportAssistant> {
    let (source, origin) = read(config, config.schema.corpus.templates.as_deref(), BUNDLED_TEMPLATES)?;
    let assistant = match source {
        Source::Toml(text) => SupportAssistant::from_toml_str(&text),
        Source::Json(text) => SupportAssistant::from_json_str(&text),
    };

    let assistant = assistant
        .map_err(Error::from)
        .context(format!("Failed to load templates from {}", origin))?;

    tracing::debug!(
        origin = %origin,
        templates = assistant.templates().len(),
        "Template corpus loaded"
    );
    zibra_telemetry::metrics().gauge("corpus.templates", assistant.templates().len() as f64);

    Ok(assistant)
}

/// Load the help center corpus with search bounds from configuration
pub fn load_help(config: &Config) -> Result<HelpCenter> {
    let (source, origin) = read(config, config.schema.corpus.help.as_deref(), BUNDLED_HELP)?;
    let help = match source {
        Source::Toml(text) => HelpCenter::from_toml_str(&text),
        Source::Json(text) => HelpCenter::from_json_str(&text),
    };

    let help = help
        .map_err(Error::from)
        .context(format!("Failed to load help articles from {}", origin))?
        .with_options(config.schema.search.to_options());

    tracing::debug!(
        origin = %origin,
        articles = help.articles().len(),
        categories = help.categories().len(),
        synonyms = help.synonyms().len(),
        "Help corpus loaded"
    );
    zibra_telemetry::metrics().gauge("corpus.articles", help.articles().len() as f64);

    Ok(help)
}

fn read(config: &Config, configured: Option<&Path>, bundled: &str) -> Result<(Source, String)> {
    let Some(relative) = configured else {
        return Ok((Source::Toml(bundled.to_string()), "bundled sample".to_string()));
    };

    let path: PathBuf = config.resolve(relative);
    let text = std::fs::read_to_string(&path).map_err(|e| {
        Error::corpus(format!("Cannot read corpus file {}", path.display()))
            .with_suggestion("Check the [corpus] paths in your configuration")
            .with_source(e)
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let source = if is_json { Source::Json(text) } else { Source::Toml(text) };
    Ok((source, path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zibra_search::Role;

    #[test]
    fn test_bundled_templates_load() {
        let assistant = load_assistant(&Config::defaults()).unwrap();
        assert!(assistant.templates().len() > 200);
        assert_eq!(assistant.templates().catch_all().unwrap().id, "x-general-help");
    }

    #[test]
    fn test_bundled_help_loads() {
        let help = load_help(&Config::defaults()).unwrap();
        assert_eq!(help.categories().len(), 10);
        assert_eq!(help.articles().len(), 40);
        assert!(!help.synonyms().is_empty());
    }

    #[test]
    fn test_bundled_template_selection() {
        let assistant = load_assistant(&Config::defaults()).unwrap();
        let template = assistant
            .match_template("add funds to top up my wallet", Role::Rider, None)
            .unwrap();
        assert_eq!(template.id, "r-wallet-topup");

        let fallback = assistant.select("hello there", Role::Driver, None);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.template().unwrap().id, "x-general-help");
    }

    #[test]
    fn test_missing_corpus_file_is_corpus_error() {
        let mut config = Config::defaults();
        config.schema.corpus.templates = Some(PathBuf::from("/nonexistent/templates.toml"));

        let err = load_assistant(&config).unwrap_err();
        assert_eq!(err.exit_code(), zibra_core::exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_json_corpus_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(
            &path,
            r#"[{"id": "r-1", "role": "rider", "keywords": ["wallet"], "response": "Wallet help"}]"#,
        )
        .unwrap();

        let mut config = Config::defaults();
        config.schema.corpus.templates = Some(path);

        let assistant = load_assistant(&config).unwrap();
        assert_eq!(assistant.respond("wallet", Role::Rider, None), "Wallet help");
    }
}
