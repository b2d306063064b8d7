use crate::domain::{Answers, AppError, PromptSpec};
use crate::ports::Prompter;

/// Answers given up front (`--answer key=value`), falling back to another
/// prompter for everything else.
///
/// A preset that fails validation cannot be asked again, so it ends the run.
pub struct PresetPrompter<P: Prompter> {
    presets: Answers,
    fallback: P,
    last_was_preset: bool,
}

impl<P: Prompter> PresetPrompter<P> {
    pub fn new(presets: Answers, fallback: P) -> Self {
        Self { presets, fallback, last_was_preset: false }
    }
}

impl<P: Prompter> Prompter for PresetPrompter<P> {
    fn ask(&mut self, prompt: &PromptSpec, answers: &Answers) -> Result<String, AppError> {
        if let Some(value) = self.presets.get(&prompt.name) {
            self.last_was_preset = true;
            return Ok(value.to_string());
        }
        self.last_was_preset = false;
        self.fallback.ask(prompt, answers)
    }

    fn report_invalid(&mut self, prompt: &PromptSpec, message: &str) -> Result<(), AppError> {
        if self.last_was_preset {
            return Err(AppError::Validation {
                prompt: prompt.name.clone(),
                message: message.to_string(),
            });
        }
        self.fallback.report_invalid(prompt, message)
    }
}
