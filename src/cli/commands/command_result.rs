use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::{PruneRunReport, RunReport};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Update(UpdateSummary),
    Prune(PruneSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub report: RunReport,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct UpdateSummary {
    /// Changed files that were processed, with their run.
    pub runs: Vec<(PathBuf, RunReport)>,
    /// Changed files outside the source root or with another extension.
    pub skipped: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct PruneSummary {
    pub report: PruneRunReport,
    pub apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when the file already existed and was left alone.
    pub created: bool,
}

/// Result of running an i18n-sync command
#[derive(Debug)]
pub struct CommandResult {
    /// Project root; reported paths are shown relative to it.
    pub root: PathBuf,
    /// Report unchanged files and other detail.
    pub verbose: bool,
    pub summary: CommandSummary,
}

impl CommandResult {
    /// - `Error` when a source file could not be read or parsed
    /// - `Failure` when a translation file failed, a dry run found missing
    ///   keys, or `init` found an existing config
    /// - `Success` otherwise
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Sync(summary) => {
                let report = &summary.report;
                if !report.source_errors.is_empty() {
                    ExitStatus::Error
                } else if report.failed_files() > 0 || (summary.dry_run && report.added_keys() > 0) {
                    ExitStatus::Failure
                } else {
                    ExitStatus::Success
                }
            }
            CommandSummary::Update(summary) => {
                let reports = summary.runs.iter().map(|(_, report)| report);
                if reports.clone().any(|r| !r.source_errors.is_empty()) {
                    ExitStatus::Error
                } else if reports.clone().any(|r| r.failed_files() > 0) {
                    ExitStatus::Failure
                } else {
                    ExitStatus::Success
                }
            }
            CommandSummary::Prune(summary) => {
                let report = &summary.report;
                if !report.source_errors.is_empty() {
                    ExitStatus::Error
                } else if report.files.iter().any(|f| f.outcome.is_failed()) {
                    ExitStatus::Failure
                } else {
                    ExitStatus::Success
                }
            }
            CommandSummary::Init(summary) => {
                if summary.created {
                    ExitStatus::Success
                } else {
                    ExitStatus::Failure
                }
            }
        }
    }
}
