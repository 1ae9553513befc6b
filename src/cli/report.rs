//! Report formatting and printing.
//!
//! Progress and summaries go to stdout, errors to stderr. Paths are shown
//! relative to the project root. Kept apart from the core so the library
//! stays silent apart from verbose logging.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, PruneSummary, SyncSummary, UpdateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{FilePruneReport, PruneOutcome, RunReport, SyncError, SyncOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, out: &mut O, err: &mut E) {
    let mut printer = Printer {
        root: &result.root,
        verbose: result.verbose,
        out,
        err,
    };

    match &result.summary {
        CommandSummary::Sync(summary) => printer.sync(summary),
        CommandSummary::Update(summary) => printer.update(summary),
        CommandSummary::Prune(summary) => printer.prune(summary),
        CommandSummary::Init(summary) => printer.init(summary),
    }
}

struct Printer<'a, O: Write, E: Write> {
    root: &'a Path,
    verbose: bool,
    out: &'a mut O,
    err: &'a mut E,
}

impl<O: Write, E: Write> Printer<'_, O, E> {
    fn sync(&mut self, summary: &SyncSummary) {
        let report = &summary.report;
        if !self.source_errors(&report.source_errors) {
            return;
        }
        self.sync_files(report);

        let failed = report.failed_files();
        if failed > 0 {
            self.failed_files(failed);
            return;
        }

        let pending: Vec<_> = report.files.iter().filter(|f| f.outcome.added() > 0).collect();
        if summary.dry_run && !pending.is_empty() {
            let _ = writeln!(
                self.out,
                "{} {} key(s) in {} file(s).",
                "Would add".yellow().bold(),
                report.added_keys(),
                pending.len()
            );
            let _ = writeln!(self.out, "Run without {} to write them.", "--dry-run".cyan());
            return;
        }

        let status = if pending.is_empty() {
            "translation files are up to date".to_string()
        } else {
            format!("updated {} translation file(s)", pending.len())
        };
        let _ = writeln!(
            self.out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Extracted {} key(s) from {} source file(s), {}",
                report.key_count, report.source_files, status
            )
            .green()
        );
    }

    fn update(&mut self, summary: &UpdateSummary) {
        if self.verbose {
            for path in &summary.skipped {
                let path = self.display(path);
                let _ = writeln!(
                    self.out,
                    "Skipped {} (not a source file under the source root)",
                    path
                );
            }
        }

        let mut failed = 0;
        let mut added = 0;
        for (_, report) in &summary.runs {
            if !self.source_errors(&report.source_errors) {
                continue;
            }
            self.sync_files(report);
            failed += report.failed_files();
            added += report.added_keys();
        }

        if failed > 0 {
            self.failed_files(failed);
        } else if summary.runs.iter().all(|(_, r)| r.source_errors.is_empty()) {
            let _ = writeln!(
                self.out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Processed {} changed file(s), added {} key(s)",
                    summary.runs.len(),
                    added
                )
                .green()
            );
        }
    }

    fn prune(&mut self, summary: &PruneSummary) {
        let report = &summary.report;
        if !self.source_errors(&report.source_errors) {
            return;
        }

        let mut total = 0;
        let mut files = 0;
        let mut failed = 0;
        for file in &report.files {
            match &file.outcome {
                PruneOutcome::WouldPrune { removed } | PruneOutcome::Pruned { removed } => {
                    self.pruned_file(file, removed);
                    total += removed.len();
                    files += 1;
                }
                PruneOutcome::Clean => {
                    if self.verbose {
                        let path = self.display(&file.path);
                        let _ = writeln!(self.out, "{}: clean", path);
                    }
                }
                PruneOutcome::Failed(error) => {
                    self.error(error);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            self.failed_files(failed);
        }
        if total == 0 {
            if failed == 0 {
                let _ = writeln!(
                    self.out,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    "No unused keys found".green()
                );
            }
        } else if summary.apply {
            let _ = writeln!(
                self.out,
                "{} {} key(s) in {} file(s).",
                "Deleted".green().bold(),
                total,
                files
            );
        } else {
            let _ = writeln!(
                self.out,
                "{} {} key(s) in {} file(s).",
                "Would delete".yellow().bold(),
                total,
                files
            );
            let _ = writeln!(self.out, "Run with {} to delete these keys.", "--apply".cyan());
        }
    }

    fn init(&mut self, summary: &InitSummary) {
        if summary.created {
            let _ = writeln!(
                self.out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        } else {
            let path = self.display(&summary.path);
            let _ = writeln!(self.err, "{} {} already exists", "error:".bold().red(), path);
        }
    }

    /// Print source errors. Returns false if there were any.
    fn source_errors(&mut self, errors: &[SyncError]) -> bool {
        if errors.is_empty() {
            return true;
        }
        for error in errors {
            self.error(error);
        }
        let _ = writeln!(
            self.err,
            "{} {} source file(s) could not be processed, no translation file was updated",
            FAILURE_MARK.red(),
            errors.len()
        );
        false
    }

    fn sync_files(&mut self, report: &RunReport) {
        for file in &report.files {
            let path = self.display(&file.path);
            match &file.outcome {
                SyncOutcome::Updated { added } => {
                    let _ = writeln!(
                        self.out,
                        "{} {}: added {} key(s)",
                        SUCCESS_MARK.green(),
                        path,
                        added
                    );
                }
                SyncOutcome::WouldUpdate { added } => {
                    let _ = writeln!(self.out, "{}: {} missing key(s)", path, added);
                }
                SyncOutcome::Unchanged => {
                    if self.verbose {
                        let _ = writeln!(self.out, "{}: {}", path, "up to date".dimmed());
                    }
                }
                SyncOutcome::Failed(error) => self.error(error),
            }
        }
    }

    fn pruned_file(&mut self, file: &FilePruneReport, removed: &[String]) {
        let path = self.display(&file.path);
        let _ = writeln!(self.out, "{}:", path);
        for key in removed {
            let _ = writeln!(self.out, "  - {}", key);
        }
    }

    fn failed_files(&mut self, count: usize) {
        let _ = writeln!(
            self.err,
            "{} {} translation file(s) could not be updated",
            FAILURE_MARK.red(),
            count
        );
    }

    fn error(&mut self, error: &SyncError) {
        let _ = writeln!(self.err, "{} {}", "error:".bold().red(), error);
    }

    fn display(&self, path: &Path) -> String {
        path.strip_prefix(self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
