use std::process::ExitCode;

use clap::Parser;
use dictcc::cli::{Arguments, ExitStatus};
use log::LevelFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logger(args.verbose());

    match dictcc::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr; `-v` enables this crate's debug output, `DICTCC_LOG`
/// overrides both.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("dictcc", level)
        .parse_env("DICTCC_LOG")
        .format_timestamp(None)
        .init();
}
