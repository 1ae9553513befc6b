use anyhow::Result;

use super::helper::Settings;
use super::{CommandResult, CommandSummary, PruneSummary};
use crate::cli::args::PruneCommand;

pub fn prune(cmd: PruneCommand) -> Result<CommandResult> {
    let settings = Settings::load(&cmd.common)?;
    let mut extractor = settings.extractor()?;

    let report = extractor.prune(cmd.apply);

    Ok(CommandResult {
        root: settings.root,
        verbose: settings.config.verbose,
        summary: CommandSummary::Prune(PruneSummary {
            report,
            apply: cmd.apply,
        }),
    })
}
