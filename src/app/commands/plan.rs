//! Resolve answers and build an action list without executing it.

use serde::Serialize;

use crate::app::{AppContext, prompt_flow};
use crate::domain::{ActionList, Answers, AppError};
use crate::ports::{CommandRunner, Prompter};

/// A generator's plan for one set of answers.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    pub generator: String,
    pub answers: Answers,
    pub actions: ActionList,
}

pub fn execute<C: CommandRunner, P: Prompter>(
    ctx: &AppContext<C>,
    generator: &str,
    prompter: &mut P,
) -> Result<PlanOutcome, AppError> {
    let spec = ctx.registry().get(generator)?;
    let answers = prompt_flow::collect_answers(&spec.prompts, prompter)?;
    let actions = spec.plan(&answers, ctx.plan_context())?;
    tracing::debug!(generator, actions = actions.len(), "plan built");

    Ok(PlanOutcome { generator: spec.name.clone(), answers, actions })
}
