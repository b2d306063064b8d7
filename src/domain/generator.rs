//! Generator declarations and the registry that holds them.

use std::collections::BTreeMap;
use std::fmt;

use super::{ActionList, Answers, AppError, Locations, PromptSpec};

/// Inputs a generator's action builder may read besides the answers.
#[derive(Debug, Clone)]
pub struct PlanContext {
    pub locations: Locations,
}

/// Pure mapping from answers to the action list.
pub type ActionBuilder = fn(&Answers, &PlanContext) -> Result<ActionList, AppError>;

/// A named generator: its prompts and the plan they produce.
#[derive(Clone)]
pub struct GeneratorSpec {
    pub name: String,
    pub description: String,
    pub prompts: Vec<PromptSpec>,
    pub build: ActionBuilder,
}

impl GeneratorSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        prompts: Vec<PromptSpec>,
        build: ActionBuilder,
    ) -> Self {
        Self { name: name.into(), description: description.into(), prompts, build }
    }

    /// Build the action list for already-collected answers.
    pub fn plan(&self, answers: &Answers, ctx: &PlanContext) -> Result<ActionList, AppError> {
        (self.build)(answers, ctx)
    }
}

impl fmt::Debug for GeneratorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("prompts", &self.prompts.iter().map(|p| p.name.as_str()).collect::<Vec<_>>())
            .finish()
    }
}

/// Generators available to a process, populated once at start-up.
#[derive(Debug, Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, GeneratorSpec>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: GeneratorSpec) -> Result<(), AppError> {
        if self.generators.contains_key(&spec.name) {
            return Err(AppError::DuplicateGenerator(spec.name));
        }
        self.generators.insert(spec.name.clone(), spec);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&GeneratorSpec, AppError> {
        self.generators.get(name).ok_or_else(|| AppError::GeneratorNotFound {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    pub fn specs(&self) -> impl Iterator<Item = &GeneratorSpec> {
        self.generators.values()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
