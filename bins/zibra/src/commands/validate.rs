//! Validate command - load both corpora and summarize them

use crate::corpus;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use zibra_cli::output::{format_count, Status};
use zibra_core::config::Config;
use zibra_search::Role;

/// JSON output for validate
#[derive(Debug, Serialize)]
struct JsonValidateOutput<'a> {
    config: Option<String>,
    templates: usize,
    catch_all: Option<&'a str>,
    templates_by_role: Vec<(Role, usize)>,
    articles: usize,
    categories: usize,
    synonyms: usize,
}

/// Run validate command
pub fn run(config: &Config, format: &str) -> Result<()> {
    let assistant = corpus::load_assistant(config)?;
    let help = corpus::load_help(config)?;

    let templates = assistant.templates();
    let catch_all = templates.catch_all().map(|t| t.id.as_str());
    let by_role: Vec<(Role, usize)> = Role::ALL
        .iter()
        .map(|&role| (role, templates.documents_in_scope(role).count()))
        .collect();

    if format == "json" {
        let output = JsonValidateOutput {
            config: config.path.as_ref().map(|p| p.display().to_string()),
            templates: templates.len(),
            catch_all,
            templates_by_role: by_role,
            articles: help.articles().len(),
            categories: help.categories().len(),
            synonyms: help.synonyms().len(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header("Corpus check");

    match &config.path {
        Some(path) => Status::info(&format!("Config: {}", path.display())),
        None => Status::info("Config: defaults"),
    }

    Status::success(&format!(
        "Templates: {}",
        format_count(templates.len(), "template", "templates")
    ));
    for (role, count) in &by_role {
        println!("    {:<12} {}", role.as_str().dimmed(), count);
    }

    match catch_all {
        Some(id) => Status::success(&format!("Catch-all: {}", id)),
        None => Status::warning("No catch-all template; unmatched questions get the default reply"),
    }

    Status::success(&format!(
        "Help: {} in {}, {}",
        format_count(help.articles().len(), "article", "articles"),
        format_count(help.categories().len(), "category", "categories"),
        format_count(help.synonyms().len(), "synonym entry", "synonym entries")
    ));

    Ok(())
}
