use std::fmt;

use super::AppError;

/// Lifecycle of a single generator run.
///
/// Transitions only move forward. The one self-loop is `Prompting(i)` →
/// `Prompting(i)`, taken when an answer fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Prompting(usize),
    AnswersComplete,
    ActionsBuilt,
    Executing,
    Done,
    Failed,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }

    fn allows(&self, next: RunState) -> bool {
        use RunState::*;
        match (*self, next) {
            (Idle, Prompting(0)) | (Idle, AnswersComplete) => true,
            (Prompting(i), Prompting(j)) => j == i || j == i + 1,
            (Prompting(_), AnswersComplete) => true,
            (AnswersComplete, ActionsBuilt) => true,
            (ActionsBuilt, Executing) => true,
            (Executing, Done) | (Executing, Failed) => true,
            (state, Failed) => !state.is_terminal(),
            _ => false,
        }
    }

    /// Move to `next`, rejecting backward or skipping transitions.
    pub fn advance(&mut self, next: RunState) -> Result<(), AppError> {
        if !self.allows(next) {
            return Err(AppError::InvalidTransition { from: self.to_string(), to: next.to_string() });
        }
        tracing::trace!(from = %self, to = %next, "run state transition");
        *self = next;
        Ok(())
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "Idle"),
            RunState::Prompting(i) => write!(f, "Prompting({i})"),
            RunState::AnswersComplete => write!(f, "AnswersComplete"),
            RunState::ActionsBuilt => write!(f, "ActionsBuilt"),
            RunState::Executing => write!(f, "Executing"),
            RunState::Done => write!(f, "Done"),
            RunState::Failed => write!(f, "Failed"),
        }
    }
}
