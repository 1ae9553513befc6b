use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, prune::prune, sync::sync, update::update},
};

/// Dispatch to the command handler.
///
/// Returns `Err` only for failures that prevent a command from running at all
/// (invalid config, unusable root). Per-file problems are part of the result.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Update(cmd)) => update(cmd),
        Some(Command::Prune(cmd)) => prune(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
