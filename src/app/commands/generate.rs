//! Prompt, plan and execute a generator.

use crate::app::{AppContext, prompt_flow};
use crate::domain::{ActionList, ActionOutcome, Answers, AppError, ExecutionReport, RunState};
use crate::ports::{CommandRunner, Prompter};
use crate::services::{ActionExecutor, ExecutionOptions};

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub answers: Answers,
    pub actions: ActionList,
    pub report: ExecutionReport,
}

/// Run `generator` end to end, reporting each action to `on_outcome` as it
/// completes.
///
/// A failing action ends the run with [`AppError::ActionFailed`]. Changes
/// made by earlier actions stay on disk.
pub fn execute<C, P, F>(
    ctx: &AppContext<C>,
    generator: &str,
    prompter: &mut P,
    options: ExecutionOptions,
    on_outcome: F,
) -> Result<GenerateOutcome, AppError>
where
    C: CommandRunner,
    P: Prompter,
    F: FnMut(&ActionOutcome),
{
    let spec = ctx.registry().get(generator)?;
    let mut state = RunState::Idle;

    let answers = prompt_flow::collect_answers_tracked(&spec.prompts, prompter, &mut state)?;
    let actions = spec.plan(&answers, ctx.plan_context())?;
    state.advance(RunState::ActionsBuilt)?;

    state.advance(RunState::Executing)?;
    let executor = ActionExecutor::new(ctx.renderer(), ctx.runner(), options);
    match executor.execute_with(&actions, &answers, on_outcome) {
        Ok(report) => {
            state.advance(RunState::Done)?;
            Ok(GenerateOutcome { answers, actions, report })
        }
        Err(err) => {
            state.advance(RunState::Failed)?;
            Err(err)
        }
    }
}
