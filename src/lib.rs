//! plinth: scaffold new projects from declarative generators.
//!
//! A generator is an ordered list of prompts plus a pure function from the
//! collected answers to an [`ActionList`](domain::ActionList). The executor
//! applies that list in order: it adds rendered files, splices text into
//! existing files and runs external commands. The first failing action stops
//! the run, and changes made before it are left on disk.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOutcome, GeneratorSummary, PlanOutcome, RunSettings, generate, generate_at,
    list_generators, plan,
};
pub use app::generators::builtin_registry;
pub use domain::AppError;
