use std::sync::Mutex;

use crate::domain::{AppError, ExternalCommand};
use crate::ports::CommandRunner;

/// Recording command runner. Every run is logged as its rendered line;
/// `fail_matching` makes any command containing the needle fail. Failed
/// runs are still logged, so tests can tell "attempted and failed" from
/// "never attempted".
#[derive(Default)]
pub struct FakeCommandRunner {
    pub commands: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_matching(&self, needle: &str) {
        self.failures.lock().unwrap().push(needle.to_string());
    }

    pub fn ran(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, command: &ExternalCommand) -> Result<(), AppError> {
        let line = command.to_string();
        self.commands.lock().unwrap().push(line.clone());

        let failures = self.failures.lock().unwrap();
        if let Some(needle) = failures.iter().find(|needle| line.contains(needle.as_str())) {
            return Err(AppError::CommandFailed {
                command: line,
                details: format!("scripted failure for '{needle}'"),
            });
        }
        Ok(())
    }
}
