//! Prompt declarations.

use std::path::Path;

use super::Answers;
use super::location::project_dir_name;

/// Validation predicate: `Err(message)` rejects the value.
pub type Validator = fn(&str, &Answers) -> Result<(), String>;

/// Visibility predicate over the answers collected so far.
pub type Visibility = fn(&Answers) -> bool;

/// How a prompt is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text.
    Input,
    /// One of a fixed list of choices.
    Select(Vec<String>),
}

/// A single question asked while running a generator.
///
/// A prompt with a `when` predicate is conditional: it is only asked when the
/// predicate holds for the answers given before it.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// Answer key.
    pub name: String,
    pub message: String,
    pub kind: PromptKind,
    pub validate: Option<Validator>,
    pub when: Option<Visibility>,
    pub default: Option<String>,
}

impl PromptSpec {
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: PromptKind::Input,
            validate: None,
            when: None,
            default: None,
        }
    }

    pub fn select(name: impl Into<String>, message: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: PromptKind::Select(choices),
            validate: None,
            when: None,
            default: None,
        }
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn when(mut self, visibility: Visibility) -> Self {
        self.when = Some(visibility);
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn is_visible(&self, answers: &Answers) -> bool {
        self.when.is_none_or(|when| when(answers))
    }

    /// Run the choice check (for selects) and then the custom validator.
    pub fn check(&self, value: &str, answers: &Answers) -> Result<(), String> {
        if let PromptKind::Select(choices) = &self.kind
            && !choices.iter().any(|choice| choice == value)
        {
            return Err(format!("must be one of: {}", choices.join(", ")));
        }
        match self.validate {
            Some(validator) => validator(value, answers),
            None => Ok(()),
        }
    }
}

/// Rejects blank values.
pub fn non_empty(value: &str, _answers: &Answers) -> Result<(), String> {
    if value.trim().is_empty() { Err("a value is required".to_string()) } else { Ok(()) }
}

/// Rejects names that do not give a single directory name, such as
/// `../x`, `/abs` or `a/b`.
pub fn project_name(value: &str, _answers: &Answers) -> Result<(), String> {
    project_dir_name(value).map(|_| ())
}

/// Rejects paths that are not existing directories.
pub fn existing_directory(value: &str, _answers: &Answers) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("a path is required".to_string());
    }
    if Path::new(trimmed).is_dir() {
        Ok(())
    } else {
        Err(format!("'{trimmed}' is not an existing directory"))
    }
}
