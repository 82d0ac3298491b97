//! Printing of command results.
//!
//! Lookup output goes to stdout; notes about empty results go to stderr so
//! piped JSON stays clean.

use anyhow::Result;
use colored::Colorize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, LookupSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::reporter::{print_json, print_no_results, print_table};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Lookup(summary) => print_lookup(summary)?,
        CommandSummary::Init(summary) => print_init(summary),
    }
    Ok(())
}

fn print_lookup(summary: &LookupSummary) -> Result<()> {
    match summary.format {
        OutputFormat::Table => print_table(&summary.pairs, &summary.labels)?,
        OutputFormat::Json => print_json(&summary.pairs)?,
    }

    if summary.pairs.is_empty() {
        print_no_results(&summary.term);
    }
    Ok(())
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
