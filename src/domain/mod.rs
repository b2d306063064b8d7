pub mod action;
pub mod answers;
pub mod db_engine;
pub mod error;
pub mod generator;
pub mod location;
pub mod naming;
pub mod prompt;
pub mod run_state;

pub use action::{
    Action, ActionList, ActionOutcome, ActionStatus, ExecutionReport, Placement, TemplateRef,
};
pub use answers::Answers;
pub use db_engine::DbEngine;
pub use error::{ActionError, AppError};
pub use generator::{ActionBuilder, GeneratorRegistry, GeneratorSpec, PlanContext};
pub use location::{BaseLocation, Locations};
pub use prompt::{PromptKind, PromptSpec, Validator, Visibility};
pub use run_state::RunState;
