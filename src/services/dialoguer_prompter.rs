use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{Answers, AppError, PromptKind, PromptSpec};
use crate::ports::Prompter;

/// Interactive prompter on the user's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &PromptSpec, _answers: &Answers) -> Result<String, AppError> {
        match &prompt.kind {
            PromptKind::Select(choices) => {
                let default = prompt
                    .default
                    .as_ref()
                    .and_then(|d| choices.iter().position(|c| c == d))
                    .unwrap_or(0);
                let selection = Select::new()
                    .with_prompt(&prompt.message)
                    .items(choices)
                    .default(default)
                    .interact_opt()
                    .map_err(|err| prompt_error(prompt, err))?;
                let index = selection.ok_or(AppError::Cancelled)?;
                Ok(choices[index].clone())
            }
            PromptKind::Input => {
                let mut input = Input::<String>::new().with_prompt(&prompt.message).allow_empty(true);
                if let Some(default) = &prompt.default {
                    input = input.default(default.clone());
                }
                input.interact_text().map_err(|err| prompt_error(prompt, err))
            }
        }
    }

    fn report_invalid(&mut self, _prompt: &PromptSpec, message: &str) -> Result<(), AppError> {
        eprintln!("⚠️  {}", message);
        Ok(())
    }
}

fn prompt_error(prompt: &PromptSpec, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => AppError::Cancelled,
        err => AppError::PromptFailed { prompt: prompt.name.clone(), details: err.to_string() },
    }
}
