//! Applies an [`ActionList`] to the filesystem, one action at a time.
//!
//! Execution stops at the first failing action. Actions applied before the
//! failure are left in place; there is no rollback.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{
    Action, ActionError, ActionList, ActionOutcome, ActionStatus, Answers, AppError,
    ExecutionReport, Placement, TemplateRef,
};
use crate::ports::CommandRunner;

use super::TemplateRenderer;
use super::atomic_file::atomic_write;

/// Knobs for a single execution.
#[derive(Debug, Clone, Default)]
pub struct ExecutionOptions {
    /// Relative action paths are resolved against this directory.
    pub base_dir: PathBuf,
    /// Replace files that `AddFile` would otherwise refuse to touch.
    pub overwrite: bool,
    /// Record `RunCommand` actions as skipped instead of running them.
    pub skip_commands: bool,
}

/// Executes actions with an injected renderer and command runner.
pub struct ActionExecutor<'a, C: CommandRunner> {
    renderer: &'a TemplateRenderer,
    runner: &'a C,
    options: ExecutionOptions,
}

impl<'a, C: CommandRunner> ActionExecutor<'a, C> {
    pub fn new(renderer: &'a TemplateRenderer, runner: &'a C, options: ExecutionOptions) -> Self {
        Self { renderer, runner, options }
    }

    /// Execute every action in order.
    pub fn execute(&self, actions: &ActionList, answers: &Answers) -> Result<ExecutionReport, AppError> {
        self.execute_with(actions, answers, |_| {})
    }

    /// Execute every action in order, calling `on_outcome` as each one finishes.
    ///
    /// On failure the error carries the 1-based index and description of the
    /// failing action.
    pub fn execute_with<F>(
        &self,
        actions: &ActionList,
        answers: &Answers,
        mut on_outcome: F,
    ) -> Result<ExecutionReport, AppError>
    where
        F: FnMut(&ActionOutcome),
    {
        let mut report = ExecutionReport::default();

        for (position, action) in actions.iter().enumerate() {
            let index = position + 1;
            let description = action.describe();

            let status = self.apply(action, answers).map_err(|source| {
                tracing::error!(index, action = %description, error = %source, "action failed");
                AppError::ActionFailed { index, description: description.clone(), source }
            })?;

            match status {
                ActionStatus::Applied => tracing::info!(index, action = %description, "applied"),
                ActionStatus::Skipped => tracing::info!(index, action = %description, "skipped"),
            }

            let outcome = ActionOutcome { index, description, status };
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn apply(&self, action: &Action, answers: &Answers) -> Result<ActionStatus, ActionError> {
        match action {
            Action::AddFile { path, template, context_override } => {
                let context = answers.with_overrides(context_override);
                self.add_file(&self.resolve(path), template, &context)
            }
            Action::ModifyFile { path, pattern, insertion, placement } => {
                modify_file(&self.resolve(path), pattern, insertion, *placement)
            }
            Action::RunCommand { command, working_dir } => {
                self.run_command(command, &self.resolve(working_dir))
            }
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.options.base_dir.join(path) }
    }

    fn add_file<T: serde::Serialize>(
        &self,
        target: &Path,
        template: &TemplateRef,
        context: &T,
    ) -> Result<ActionStatus, ActionError> {
        if target.exists() && !self.options.overwrite {
            return Err(ActionError::PathConflict { path: target.to_path_buf() });
        }

        let content = match template {
            TemplateRef::Named(id) => self.renderer.render(id, context),
            TemplateRef::Inline(source) => self.renderer.render_str(source, context),
        }?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| ActionError::io(parent, e))?;
        }
        fs::write(target, content).map_err(|e| ActionError::io(target, e))?;
        Ok(ActionStatus::Applied)
    }

    fn run_command(&self, command: &str, working_dir: &Path) -> Result<ActionStatus, ActionError> {
        if self.options.skip_commands {
            return Ok(ActionStatus::Skipped);
        }

        match self.runner.run(command, working_dir) {
            Ok(output) if output.is_success() => Ok(ActionStatus::Applied),
            Ok(output) => Err(ActionError::CommandFailed {
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr_tail: output.stderr_tail,
            }),
            Err(err) => Err(ActionError::CommandFailed {
                command: command.to_string(),
                exit_code: None,
                stderr_tail: vec![err.to_string()],
            }),
        }
    }
}

fn modify_file(
    target: &Path,
    pattern: &str,
    insertion: &str,
    placement: Placement,
) -> Result<ActionStatus, ActionError> {
    let content = fs::read_to_string(target).map_err(|e| ActionError::io(target, e))?;

    let Some(position) = content.find(pattern) else {
        return Err(ActionError::PatternNotFound {
            path: target.to_path_buf(),
            pattern: pattern.to_string(),
        });
    };
    let split_at = match placement {
        Placement::Before => position,
        Placement::After => position + pattern.len(),
    };

    let mut updated = String::with_capacity(content.len() + insertion.len());
    updated.push_str(&content[..split_at]);
    updated.push_str(insertion);
    updated.push_str(&content[split_at..]);

    atomic_write(target, updated.as_bytes()).map_err(|e| ActionError::io(target, e))?;
    Ok(ActionStatus::Applied)
}
