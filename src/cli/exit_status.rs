use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, no errors found
/// - `Failure` (1): Command completed but extraction produced errors
/// - `Error` (2): Command failed to run (config error, unreadable key list, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, no errors found.
    Success,
    /// Command completed but extraction produced errors.
    Failure,
    /// Command failed to run.
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
