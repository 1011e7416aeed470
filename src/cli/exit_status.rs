use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): template rendered and printed
/// - `Error` (1): the command failed before rendering (unreadable file,
///   invalid JSON data)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Template rendered and printed.
    Success,
    /// The command failed before rendering.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
