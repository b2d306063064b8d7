use crate::domain::{Answers, AppError, PromptSpec};

/// Port for presenting prompts and reading answers.
pub trait Prompter {
    /// Present `prompt` and return the raw answer.
    ///
    /// `answers` holds everything collected before this prompt.
    fn ask(&mut self, prompt: &PromptSpec, answers: &Answers) -> Result<String, AppError>;

    /// Report that the last answer to `prompt` was rejected.
    ///
    /// Returning `Ok` means the prompt may be asked again; an error ends the run.
    fn report_invalid(&mut self, prompt: &PromptSpec, message: &str) -> Result<(), AppError>;
}
