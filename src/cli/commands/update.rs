use anyhow::Result;

use super::helper::Settings;
use super::{CommandResult, CommandSummary, UpdateSummary};
use crate::{cli::args::UpdateCommand, core::FileChangeOutcome};

/// Run the incremental hook once per changed file, in the given order.
pub fn update(cmd: UpdateCommand) -> Result<CommandResult> {
    let settings = Settings::load(&cmd.common)?;
    let mut extractor = settings.extractor()?;

    let mut summary = UpdateSummary {
        runs: Vec::new(),
        skipped: Vec::new(),
    };
    for file in cmd.files {
        match extractor.on_file_changed(&file) {
            FileChangeOutcome::Ran(report) => summary.runs.push((file, report)),
            FileChangeOutcome::Skipped => summary.skipped.push(file),
        }
    }

    Ok(CommandResult {
        root: settings.root,
        verbose: settings.config.verbose,
        summary: CommandSummary::Update(summary),
    })
}
