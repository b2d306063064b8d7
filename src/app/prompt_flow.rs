//! Sequential prompt flow.

use crate::domain::{ActionList, Answers, AppError, GeneratorRegistry, PlanContext, PromptSpec, RunState};
use crate::ports::Prompter;

/// Prompt through generator `name`'s questions and build its action list.
pub fn run_generator<P: Prompter>(
    registry: &GeneratorRegistry,
    name: &str,
    prompter: &mut P,
    ctx: &PlanContext,
) -> Result<(Answers, ActionList), AppError> {
    let spec = registry.get(name)?;
    let answers = collect_answers(&spec.prompts, prompter)?;
    let actions = spec.plan(&answers, ctx)?;
    Ok((answers, actions))
}

/// Ask `prompts` in order and return the collected answers.
pub fn collect_answers<P: Prompter>(
    prompts: &[PromptSpec],
    prompter: &mut P,
) -> Result<Answers, AppError> {
    let mut state = RunState::Idle;
    collect_answers_tracked(prompts, prompter, &mut state)
}

/// [`collect_answers`], advancing `state` through `Prompting(i)` to
/// `AnswersComplete`.
///
/// Hidden prompts are skipped and never contribute a key. A rejected answer
/// is reported to the prompter and the same prompt is asked again.
pub fn collect_answers_tracked<P: Prompter>(
    prompts: &[PromptSpec],
    prompter: &mut P,
    state: &mut RunState,
) -> Result<Answers, AppError> {
    let mut answers = Answers::new();
    let mut presented = 0;

    for prompt in prompts {
        if !prompt.is_visible(&answers) {
            tracing::debug!(prompt = %prompt.name, "skipping hidden prompt");
            continue;
        }

        state.advance(RunState::Prompting(presented))?;
        loop {
            let value = prompter.ask(prompt, &answers)?;
            match prompt.check(&value, &answers) {
                Ok(()) => {
                    answers.insert(prompt.name.clone(), value);
                    break;
                }
                Err(message) => {
                    tracing::debug!(prompt = %prompt.name, %message, "answer rejected");
                    prompter.report_invalid(prompt, &message)?;
                    state.advance(RunState::Prompting(presented))?;
                }
            }
        }
        presented += 1;
    }

    state.advance(RunState::AnswersComplete)?;
    Ok(answers)
}
