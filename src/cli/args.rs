//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `search`: Look up a term online and print the translations
//! - `parse`: Extract translations from a saved result page
//! - `init`: Initialize the dictcc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Search(cmd)) => cmd.common.verbose,
            Some(Command::Parse(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered two-column table
    #[default]
    Table,
    /// JSON array of source/target objects
    Json,
}

/// Common arguments shared by lookup commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Header of the source-language column (overrides config file)
    #[arg(long)]
    pub source_label: Option<String>,

    /// Header of the target-language column (overrides config file)
    #[arg(long)]
    pub target_label: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Term to look up; several words are joined with spaces
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Dictionary base URL (overrides config file)
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SearchCommand {
    pub fn term(&self) -> String {
        self.terms.join(" ")
    }
}

#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Saved result page, or `-` to read from stdin
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a term on the dictionary site and print the translations
    Search(SearchCommand),
    /// Extract translations from a saved result page
    Parse(ParseCommand),
    /// Initialize a new .dictrc.json configuration file
    Init,
}
