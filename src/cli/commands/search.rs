use anyhow::Result;

use super::{CommandResult, helper};
use crate::cli::args::SearchCommand;
use crate::fetch::fetch_document;

pub fn search(cmd: SearchCommand) -> Result<CommandResult> {
    let mut config = helper::load_config_from_cwd()?;
    if let Some(base_url) = &cmd.base_url {
        config.base_url = base_url.clone();
        config.validate()?;
    }

    let term = cmd.term();
    let document = fetch_document(&config, &term)?;
    helper::finish_lookup(term, &document, &config, &cmd.common)
}
