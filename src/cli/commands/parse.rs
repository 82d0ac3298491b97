use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};

use super::{CommandResult, helper};
use crate::cli::args::ParseCommand;

pub fn parse(cmd: ParseCommand) -> Result<CommandResult> {
    let config = helper::load_config_from_cwd()?;
    let document = read_document(&cmd.file)?;
    helper::finish_lookup(
        cmd.file.display().to_string(),
        &document,
        &config,
        &cmd.common,
    )
}

/// Read a saved page, `-` means stdin. Invalid UTF-8 is replaced.
fn read_document(path: &Path) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("Failed to read document from stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
