use std::collections::{HashMap, VecDeque};

use crate::domain::{Answers, AppError, PromptSpec};
use crate::ports::Prompter;

/// Prompter that replays scripted answers.
///
/// Several entries for the same prompt name are returned in order, which is
/// how tests script a rejected answer followed by a corrected one.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: HashMap<String, VecDeque<String>>,
    /// Prompt names in the order they were presented.
    pub asked: Vec<String>,
    /// `(prompt name, message)` for every rejected answer.
    pub rejections: Vec<(String, String)>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new<I, K, V>(script: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut prompter = Self::default();
        for (name, value) in script {
            prompter.script.entry(name.into()).or_default().push_back(value.into());
        }
        prompter
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &PromptSpec, _answers: &Answers) -> Result<String, AppError> {
        self.asked.push(prompt.name.clone());
        self.script.get_mut(&prompt.name).and_then(VecDeque::pop_front).ok_or_else(|| {
            AppError::PromptFailed {
                prompt: prompt.name.clone(),
                details: "no scripted answer left".to_string(),
            }
        })
    }

    fn report_invalid(&mut self, prompt: &PromptSpec, message: &str) -> Result<(), AppError> {
        self.rejections.push((prompt.name.clone(), message.to_string()));
        Ok(())
    }
}
