use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{init::init, parse::parse, search::search},
};
use anyhow::Result;

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the pairs found or the init summary
/// - `Err` if the command fails (e.g., config error, fetch failure, parse error)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Search(cmd)) => search(cmd),
        Some(Command::Parse(cmd)) => parse(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
