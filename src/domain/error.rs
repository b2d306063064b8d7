use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single action while an action list is being applied.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Destination file exists and overwriting was not requested.
    #[error("File already exists: {}", .path.display())]
    PathConflict { path: PathBuf },

    /// Modify target does not contain the pattern to splice around.
    #[error("Pattern '{pattern}' not found in {}", .path.display())]
    PatternNotFound { path: PathBuf, pattern: String },

    /// Referenced template is not present in the template store.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template exists but could not be rendered with the given context.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// External command exited unsuccessfully or could not be started.
    #[error("Command '{command}' failed{}{}", exit_suffix(.exit_code), stderr_suffix(.stderr_tail))]
    CommandFailed { command: String, exit_code: Option<i32>, stderr_tail: Vec<String> },

    /// Underlying I/O failure while touching the project tree.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn exit_suffix(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

fn stderr_suffix(tail: &[String]) -> String {
    if tail.is_empty() { String::new() } else { format!("\n{}", tail.join("\n")) }
}

impl ActionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ActionError::Io { path: path.into(), source }
    }
}

/// Library-wide error type for plinth operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A prompt answer was rejected and could not be asked again.
    #[error("Invalid answer for '{prompt}': {message}")]
    Validation { prompt: String, message: String },

    /// `--answer` value that is not `key=value`.
    #[error("Invalid answer '{0}': expected key=value")]
    InvalidAnswerPair(String),

    /// Prompt could not be presented or read.
    #[error("Failed to read answer for '{prompt}': {details}")]
    PromptFailed { prompt: String, details: String },

    /// User cancelled an interactive prompt.
    #[error("Cancelled")]
    Cancelled,

    /// Generator name is not registered.
    #[error("Generator '{name}' not found. Available: {available}")]
    GeneratorNotFound { name: String, available: String },

    /// A generator with the same name is already registered.
    #[error("Generator '{0}' is already registered")]
    DuplicateGenerator(String),

    /// Template id is not present in the template store.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template failed to load or render.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// Run state machine was asked to move somewhere it cannot go.
    #[error("Invalid run transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Action execution halted at the given (1-based) action index.
    #[error("Action {index} failed ({description}): {source}")]
    ActionFailed {
        index: usize,
        description: String,
        #[source]
        source: ActionError,
    },

    /// Plan serialization failed.
    #[error("Failed to serialize plan: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Closest `io::ErrorKind` for callers that branch on error category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Validation { .. }
            | AppError::InvalidAnswerPair(_)
            | AppError::TemplateRender { .. }
            | AppError::InvalidTransition { .. }
            | AppError::Serialization(_) => io::ErrorKind::InvalidInput,
            AppError::GeneratorNotFound { .. } | AppError::TemplateNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::DuplicateGenerator(_) => io::ErrorKind::AlreadyExists,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::PromptFailed { .. } => io::ErrorKind::Other,
            AppError::ActionFailed { source, .. } => match source {
                ActionError::PathConflict { .. } => io::ErrorKind::AlreadyExists,
                ActionError::PatternNotFound { .. } | ActionError::TemplateNotFound(_) => {
                    io::ErrorKind::NotFound
                }
                ActionError::Io { source, .. } => source.kind(),
                ActionError::TemplateRender { .. } => io::ErrorKind::InvalidInput,
                ActionError::CommandFailed { .. } => io::ErrorKind::Other,
            },
        }
    }
}

impl From<AppError> for ActionError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::TemplateNotFound(id) => ActionError::TemplateNotFound(id),
            AppError::TemplateRender { template, details } => {
                ActionError::TemplateRender { template, details }
            }
            other => ActionError::TemplateRender {
                template: String::from("<unknown>"),
                details: other.to_string(),
            },
        }
    }
}
