use crate::cli::args::OutputFormat;
use crate::cli::exit_status::ExitStatus;
use crate::core::TranslationPair;
use crate::reporter::Labels;

#[derive(Debug)]
pub enum CommandSummary {
    Lookup(LookupSummary),
    Init(InitSummary),
}

/// Outcome of a `search` or `parse` run.
#[derive(Debug)]
pub struct LookupSummary {
    /// Searched term, or the input file for `parse`.
    pub term: String,
    pub pairs: Vec<TranslationPair>,
    pub labels: Labels,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running dictcc commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// A lookup that completed but found nothing is a `Failure`, so callers
    /// can tell it apart from an aborted run (`Error`).
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Lookup(summary) if summary.pairs.is_empty() => ExitStatus::Failure,
            CommandSummary::Lookup(_) | CommandSummary::Init(_) => ExitStatus::Success,
        }
    }
}
