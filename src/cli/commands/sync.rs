use anyhow::Result;

use super::helper::Settings;
use super::{CommandResult, CommandSummary, SyncSummary};
use crate::cli::args::SyncCommand;

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let settings = Settings::load(&cmd.common)?;
    let mut extractor = settings.extractor()?.with_dry_run(cmd.dry_run);

    let report = extractor.on_build_start();

    Ok(CommandResult {
        root: settings.root,
        verbose: settings.config.verbose,
        summary: CommandSummary::Sync(SyncSummary {
            report,
            dry_run: cmd.dry_run,
        }),
    })
}
