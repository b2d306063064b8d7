use std::path::Path;

use crate::domain::AppError;

/// Exit status and trailing stderr of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stderr_tail: Vec<String>,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self { exit_code: Some(0), stderr_tail: Vec::new() }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for running external commands such as the package manager.
pub trait CommandRunner {
    /// Run `command` in `working_dir` and wait for it to exit.
    ///
    /// An `Err` means the command could not be started at all.
    fn run(&self, command: &str, working_dir: &Path) -> Result<CommandOutput, AppError>;
}
