//! Ask command - select the support template for a question

use crate::corpus;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use zibra_cli::output::{format_score, Status};
use zibra_core::config::Config;
use zibra_search::{Role, Selection, DEFAULT_RESPONSE};
use zibra_telemetry::{metrics, Timer};

/// JSON output for ask
#[derive(Debug, Serialize)]
struct JsonAskOutput<'a> {
    query: &'a str,
    role: Role,
    id: Option<&'a str>,
    category: Option<&'a str>,
    score: Option<f64>,
    fallback: bool,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<serde_json::Value>,
}

/// Run ask command
pub fn run(
    config: &Config,
    query: &str,
    role: &str,
    context: Option<&str>,
    stats: bool,
    format: &str,
) -> Result<()> {
    let role: Role = role.parse().map_err(zibra_core::Error::from)?;
    let assistant = corpus::load_assistant(config)?;

    let timer = Timer::start("ask.duration_ms");
    let selection = assistant.select(query, role, context);
    let elapsed = timer.stop();

    if selection.is_fallback() {
        metrics().increment("ask.catch_all");
    }

    let template = selection.template();
    let content = template.map_or(DEFAULT_RESPONSE, |t| t.content.as_str());

    if format == "json" {
        let output = JsonAskOutput {
            query,
            role,
            id: template.map(|t| t.id.as_str()),
            category: template.map(|t| t.category.as_str()),
            score: selection.score(),
            fallback: selection.is_fallback(),
            content,
            metrics: stats.then(|| metrics().export_json()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match selection {
        Selection::Matched(result) => {
            println!(
                "{} {} {}",
                result.item.id.bold(),
                format!("({})", result.item.category).dimmed(),
                format!("score {}", format_score(result.score)).cyan()
            );
        }
        Selection::CatchAll(template) => {
            Status::warning(&format!("No template matched; answering with {}", template.id));
        }
        Selection::NoMatch => {
            Status::warning("No template matched and the corpus has no catch-all");
        }
    }

    println!();
    println!("{}", content);

    if stats {
        super::print_stats(elapsed);
    }

    Ok(())
}
