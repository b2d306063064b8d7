//! Declarative actions produced by generators and applied by the executor.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Source of the text written by an [`Action::AddFile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateRef {
    /// Template looked up by id in the template store.
    Named(String),
    /// Template source carried inline.
    Inline(String),
}

/// Where [`Action::ModifyFile`] splices its insertion relative to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Before,
    After,
}

/// One unit of filesystem or process effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddFile {
        path: PathBuf,
        template: TemplateRef,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        context_override: BTreeMap<String, String>,
    },
    ModifyFile {
        path: PathBuf,
        pattern: String,
        insertion: String,
        placement: Placement,
    },
    /// `command` is split into words and run without a shell; `&&`, pipes and
    /// redirects are not interpreted.
    RunCommand {
        command: String,
        working_dir: PathBuf,
    },
}

impl Action {
    /// Add a file rendered from a named template.
    pub fn add(path: impl Into<PathBuf>, template_id: impl Into<String>) -> Self {
        Action::AddFile {
            path: path.into(),
            template: TemplateRef::Named(template_id.into()),
            context_override: BTreeMap::new(),
        }
    }

    /// Add a file rendered from inline template text.
    pub fn add_inline(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Action::AddFile {
            path: path.into(),
            template: TemplateRef::Inline(source.into()),
            context_override: BTreeMap::new(),
        }
    }

    pub fn modify_after(
        path: impl Into<PathBuf>,
        pattern: impl Into<String>,
        insertion: impl Into<String>,
    ) -> Self {
        Action::ModifyFile {
            path: path.into(),
            pattern: pattern.into(),
            insertion: insertion.into(),
            placement: Placement::After,
        }
    }

    pub fn run(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Action::RunCommand { command: command.into(), working_dir: working_dir.into() }
    }

    /// Attach a context value that only this action's template sees.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Action::AddFile { context_override, .. } = &mut self {
            context_override.insert(key.into(), value.into());
        }
        self
    }

    /// One-line description for plans, logs and failure reports.
    pub fn describe(&self) -> String {
        match self {
            Action::AddFile { path, .. } => format!("add {}", path.display()),
            Action::ModifyFile { path, .. } => format!("modify {}", path.display()),
            Action::RunCommand { command, working_dir } => {
                format!("run `{}` in {}", command, working_dir.display())
            }
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Action::RunCommand { .. })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Ordered, immutable plan produced once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionList(Vec<Action>);

impl ActionList {
    pub fn new(actions: Vec<Action>) -> Self {
        Self(actions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Action>> for ActionList {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

/// How an individual action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Applied,
    Skipped,
}

/// Per-action log entry returned by a successful execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    /// 1-based position in the action list.
    pub index: usize,
    pub description: String,
    pub status: ActionStatus,
}

/// Log of a completed action list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    pub outcomes: Vec<ActionOutcome>,
}

impl ExecutionReport {
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status == ActionStatus::Applied).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status == ActionStatus::Skipped).count()
    }
}
