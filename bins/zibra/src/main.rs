//! ZIBRA - support template selection and help search
//!
//! Answers support questions from a role-scoped template corpus and searches
//! the help center with synonym expansion.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use zibra_cli::output::Status;
use zibra_core::config::Config;
use zibra_core::exit_codes;
use zibra_telemetry::TelemetryConfig;

mod commands;
mod corpus;

use commands::{ask, categories, language, search, validate};

/// Support template selection and help search
#[derive(Parser)]
#[command(name = "zibra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (searched in standard locations if omitted)
    #[arg(short, long, global = true, env = "ZIBRA_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the support template that answers a question
    Ask {
        /// Role of the person asking
        #[arg(short, long, default_value = "general")]
        role: String,

        /// Page or screen the question came from
        #[arg(long)]
        context: Option<String>,

        /// Print timing and counters after the answer
        #[arg(long)]
        stats: bool,

        /// The question
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Search help articles
    Search {
        /// Only search articles in this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print timing and counters after the results
        #[arg(long)]
        stats: bool,

        /// Search terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List help categories
    Categories,

    /// Load corpora and report what they contain
    Validate,

    /// Resolve the language to answer in
    Language {
        /// Language stored on the user's profile
        #[arg(short, long)]
        profile: Option<String>,

        /// Language reported by the device
        #[arg(short, long)]
        device: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&anyhow::Error::new(e), &cli.format),
    };

    let telemetry = TelemetryConfig {
        log_level: if cli.verbose {
            "debug".to_string()
        } else {
            config.schema.logging.level.clone()
        },
        json: config.schema.logging.json,
        ..TelemetryConfig::default()
    };
    if let Err(e) = zibra_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let result = match cli.command {
        Commands::Ask { role, context, stats, query } => {
            ask::run(&config, &query.join(" "), &role, context.as_deref(), stats, &cli.format)
        }

        Commands::Search { category, stats, query } => {
            search::run(&config, &query.join(" "), category.as_deref(), stats, &cli.format)
        }

        Commands::Categories => categories::run(&config, &cli.format),

        Commands::Validate => validate::run(&config, &cli.format),

        Commands::Language { profile, device } => {
            language::run(&config, profile.as_deref(), device.as_deref(), &cli.format)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, &cli.format),
    }
}

/// Print an error and map it to the process exit code
fn report(error: &anyhow::Error, format: &str) -> ExitCode {
    let core = error.downcast_ref::<zibra_core::Error>();

    if format == "json" {
        let body = match core {
            Some(e) => serde_json::to_string_pretty(&e.to_report()),
            None => serde_json::to_string_pretty(&serde_json::json!({ "message": error.to_string() })),
        };
        if let Ok(body) = body {
            eprintln!("{}", body);
        }
    } else {
        Status::error(&error.to_string());
    }

    let code = core.map_or(exit_codes::FAILURE, zibra_core::Error::exit_code);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
