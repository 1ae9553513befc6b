use std::fs;

use anyhow::{Context, Result};

use super::helper::project_root;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::{
    cli::args::InitCommand,
    config::{CONFIG_FILE_NAME, default_config_json},
};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let root = project_root(cmd.root.as_deref())?;
    let path = root.join(CONFIG_FILE_NAME);

    let created = !path.exists();
    if created {
        let content = format!("{}\n", default_config_json()?);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(CommandResult {
        root,
        verbose: false,
        summary: CommandSummary::Init(InitSummary { path, created }),
    })
}
