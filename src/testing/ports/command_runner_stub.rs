use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Side effect run in the working directory when a command is invoked.
pub type CommandEffect = fn(&Path);

/// Command runner that records invocations instead of spawning processes.
#[derive(Default)]
pub struct FakeCommandRunner {
    invocations: Mutex<Vec<(String, PathBuf)>>,
    failures: HashMap<String, CommandOutput>,
    effects: HashMap<String, CommandEffect>,
}

#[allow(dead_code)]
impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code` and the given stderr lines.
    pub fn fail_on(mut self, command: &str, code: i32, stderr: &[&str]) -> Self {
        self.failures.insert(
            command.to_string(),
            CommandOutput {
                exit_code: Some(code),
                stderr_tail: stderr.iter().map(|line| line.to_string()).collect(),
            },
        );
        self
    }

    /// Run `effect` in the working directory whenever `command` succeeds.
    pub fn with_effect(mut self, command: &str, effect: CommandEffect) -> Self {
        self.effects.insert(command.to_string(), effect);
        self
    }

    /// Commands with their working directories, in invocation order.
    pub fn invocations(&self) -> Vec<(String, PathBuf)> {
        self.invocations.lock().unwrap().clone()
    }

    /// Commands only, in invocation order.
    pub fn commands(&self) -> Vec<String> {
        self.invocations().into_iter().map(|(command, _)| command).collect()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<CommandOutput, AppError> {
        self.invocations.lock().unwrap().push((command.to_string(), working_dir.to_path_buf()));

        if let Some(failure) = self.failures.get(command) {
            return Ok(failure.clone());
        }
        if let Some(effect) = self.effects.get(command) {
            effect(working_dir);
        }
        Ok(CommandOutput::success())
    }
}
