use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for CLI tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but the run was rejected or partly failed
/// - `Error` (2): Command failed due to internal error (I/O error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Invalid user input, or some translation tasks could not be written.
    Failure,
    /// Command failed due to internal error (I/O error, config error, etc.).
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
