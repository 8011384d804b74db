use std::process::Command;

use crate::domain::{AppError, ExternalCommand};
use crate::ports::CommandRunner;

/// Command runner spawning real subprocesses with inherited stdio, so
/// restart and certbot output scrolls in the operator's terminal.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, command: &ExternalCommand) -> Result<(), AppError> {
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|e| AppError::CommandFailed {
                command: command.to_string(),
                details: format!("failed to launch: {e}"),
            })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status code {code}"),
                None => "terminated by a signal".to_string(),
            };
            return Err(AppError::CommandFailed { command: command.to_string(), details });
        }

        Ok(())
    }
}
