//! Categories command - list help categories

use crate::corpus;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use zibra_cli::output::{format_count, Status};
use zibra_core::config::Config;

/// JSON output for categories
#[derive(Debug, Serialize)]
struct JsonCategoriesOutput<'a> {
    total: usize,
    categories: Vec<CategoryDetail<'a>>,
}

#[derive(Debug, Serialize)]
struct CategoryDetail<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    articles: usize,
}

/// Run categories command
pub fn run(config: &Config, format: &str) -> Result<()> {
    let help = corpus::load_help(config)?;

    let details: Vec<CategoryDetail<'_>> = help
        .categories()
        .iter()
        .map(|c| CategoryDetail {
            id: &c.id,
            name: &c.name,
            description: &c.description,
            articles: help.articles_in_category(&c.id).len(),
        })
        .collect();

    if format == "json" {
        let output = JsonCategoriesOutput {
            total: details.len(),
            categories: details,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header("Help categories");

    if details.is_empty() {
        Status::info("This help corpus declares no categories");
        return Ok(());
    }

    println!(
        "  {:<22} {:<26} {}",
        "Id".dimmed(),
        "Name".dimmed(),
        "Articles".dimmed()
    );
    for detail in &details {
        println!(
            "  {:<22} {:<26} {}",
            detail.id.bold(),
            detail.name,
            detail.articles
        );
        if !detail.description.is_empty() {
            println!("  {:<22} {}", "", detail.description.dimmed());
        }
    }

    println!();
    println!("  {}", format_count(details.len(), "category", "categories"));

    Ok(())
}
