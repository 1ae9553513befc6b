use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): translation files are in sync
/// - `Failure` (1): a dry run found missing keys, or a translation file failed
/// - `Error` (2): the run could not proceed (invalid config, unreadable or unparsable source)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Work left to do, or some output could not be written.
    Failure,
    /// Nothing was synchronized.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
