use std::env;

use anyhow::{Context, Result};
use log::debug;

use super::{CommandResult, CommandSummary, LookupSummary};
use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::extract_translations;
use crate::reporter::Labels;

/// Load `.dictrc.json` starting from the current directory.
pub fn load_config_from_cwd() -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let result = load_config(&cwd)?;
    match &result.path {
        Some(path) => debug!("Using config {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }
    Ok(result.config)
}

/// Column headers from config, with command-line overrides applied.
pub fn labels(config: &Config, common: &CommonArgs) -> Labels {
    Labels::new(
        common
            .source_label
            .clone()
            .unwrap_or_else(|| config.source_label.clone()),
        common
            .target_label
            .clone()
            .unwrap_or_else(|| config.target_label.clone()),
    )
}

/// Run the extraction pipeline over a fetched or loaded document.
pub fn finish_lookup(
    term: String,
    document: &str,
    config: &Config,
    common: &CommonArgs,
) -> Result<CommandResult> {
    let pairs = extract_translations(document, &config.sentinels())
        .context("Dictionary page format not recognized")?;
    debug!("Found {} translation(s) for \"{}\"", pairs.len(), term);

    Ok(CommandResult {
        summary: CommandSummary::Lookup(LookupSummary {
            term,
            pairs,
            labels: labels(config, common),
            format: common.format,
        }),
    })
}
