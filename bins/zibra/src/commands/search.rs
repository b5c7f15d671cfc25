//! Search command - fuzzy help article search

use crate::corpus;
use anyhow::Result;
use serde::Serialize;
use zibra_cli::output::{format_count, preview, Status};
use zibra_core::config::Config;
use zibra_core::Error;
use zibra_telemetry::{metrics, Timer};

const SUMMARY_WIDTH: usize = 72;

/// JSON output for search
#[derive(Debug, Serialize)]
struct JsonSearchOutput<'a> {
    query: &'a str,
    category: Option<&'a str>,
    fallback: bool,
    total: usize,
    results: Vec<JsonSearchHit<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct JsonSearchHit<'a> {
    id: &'a str,
    category: &'a str,
    title: &'a str,
    summary: &'a str,
    score: f64,
}

/// Run search command
pub fn run(
    config: &Config,
    query: &str,
    category: Option<&str>,
    stats: bool,
    format: &str,
) -> Result<()> {
    let help = corpus::load_help(config)?;

    if let Some(id) = category {
        if help.category(id).is_none() {
            return Err(Error::validation(format!("Unknown help category '{}'", id))
                .with_suggestion("Run `zibra categories` to list category ids")
                .into());
        }
    }

    let timer = Timer::start("search.duration_ms");
    let outcome = match category {
        Some(id) => help.search_in_category(query, id),
        None => help.search_scored(query),
    };
    let elapsed = timer.stop();

    if outcome.fallback {
        metrics().increment("search.fallback");
    }

    if format == "json" {
        let output = JsonSearchOutput {
            query,
            category,
            fallback: outcome.fallback,
            total: outcome.results.len(),
            results: outcome
                .results
                .iter()
                .map(|hit| JsonSearchHit {
                    id: &hit.item.id,
                    category: &hit.item.category,
                    title: &hit.item.title,
                    summary: &hit.item.summary,
                    score: hit.score,
                })
                .collect(),
            metrics: stats.then(|| metrics().export_json()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if outcome.results.is_empty() {
        Status::info("Type a question to search the help center");
    } else if outcome.fallback {
        Status::warning("No direct matches; showing popular articles");
    } else {
        Status::success(&format!(
            "{} for \"{}\"",
            format_count(outcome.results.len(), "article", "articles"),
            query.trim()
        ));
    }

    for (position, hit) in outcome.results.iter().enumerate() {
        Status::ranked(position + 1, hit.score, &hit.item.id, &hit.item.title);
        println!("      {}", preview(&hit.item.summary, SUMMARY_WIDTH));
    }

    if stats {
        super::print_stats(elapsed);
    }

    Ok(())
}
