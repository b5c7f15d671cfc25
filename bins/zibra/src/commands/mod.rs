//! CLI command implementations

pub mod ask;
pub mod categories;
pub mod language;
pub mod search;
pub mod validate;

use owo_colors::OwoColorize;
use std::time::Duration;
use zibra_cli::output::{format_duration, Status};

/// Print query timing and engine counters gathered so far
pub(crate) fn print_stats(elapsed: Duration) {
    let metrics = zibra_telemetry::metrics();

    Status::subheader("Stats");
    println!("  {:<18} {}", "elapsed".dimmed(), format_duration(elapsed));
    for name in ["ask.catch_all", "search.fallback"] {
        println!("  {:<18} {}", name.dimmed(), metrics.counter(name));
    }
    println!("  {:<18} {}", "session".dimmed(), zibra_telemetry::session_id());
}
