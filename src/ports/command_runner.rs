use crate::domain::{AppError, ExternalCommand};

/// Execution of external commands with the operator watching: stdout and
/// stderr pass straight through to the terminal.
pub trait CommandRunner {
    /// Run the command to completion. Anything short of a zero exit
    /// status is `AppError::CommandFailed`.
    fn run(&self, command: &ExternalCommand) -> Result<(), AppError>;
}
