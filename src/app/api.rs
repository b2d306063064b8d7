//! API Facade for the application.
//!
//! Loads configuration, builds the [`AppContext`] and runs commands against it.

use std::path::{Path, PathBuf};

use crate::app::config::{self, Config};
use crate::app::{AppContext, commands, generators};
use crate::domain::{ActionOutcome, AppError, PlanContext};
use crate::ports::Prompter;
use crate::services::{
    DirectoryTemplateStore, EmbeddedTemplateStore, ExecutionOptions, ShellCommandRunner,
    TemplateRenderer,
};

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::app::commands::list::GeneratorSummary;
pub use crate::app::commands::plan::PlanOutcome;

/// Per-invocation settings. Flags set here win over the config file.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    pub config_path: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub overwrite: bool,
    pub skip_commands: bool,
}

impl RunSettings {
    fn load_config(&self) -> Result<Config, AppError> {
        config::load_config(self.config_path.as_deref())
    }

    fn execution_options(&self, config: &Config, base_dir: PathBuf) -> ExecutionOptions {
        ExecutionOptions {
            base_dir,
            overwrite: self.overwrite || config.execution.overwrite,
            skip_commands: self.skip_commands || config.execution.skip_commands,
        }
    }
}

fn create_renderer(templates_dir: Option<&Path>) -> Result<TemplateRenderer, AppError> {
    let embedded = EmbeddedTemplateStore::new();
    match templates_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using template directory");
            let store = DirectoryTemplateStore::load(dir)?.with_fallback(&embedded);
            Ok(TemplateRenderer::from_store(&store))
        }
        None => Ok(TemplateRenderer::from_store(&embedded)),
    }
}

/// Create an `AppContext` rooted at `current`.
fn create_context(
    settings: &RunSettings,
    config: &Config,
    current: PathBuf,
) -> Result<AppContext<ShellCommandRunner>, AppError> {
    let templates_dir = settings.templates_dir.as_deref().or(config.templates.dir.as_deref());
    let renderer = create_renderer(templates_dir)?;
    let plan_context = PlanContext { locations: config.locations(current)? };

    Ok(AppContext::new(
        generators::builtin_registry()?,
        renderer,
        ShellCommandRunner::new(),
        plan_context,
    ))
}

/// Names and descriptions of the built-in generators.
pub fn list_generators() -> Result<Vec<GeneratorSummary>, AppError> {
    let registry = generators::builtin_registry()?;
    Ok(commands::list::execute(&registry))
}

/// Collect answers and build the action list for `generator` without executing it.
pub fn plan<P: Prompter>(
    generator: &str,
    prompter: &mut P,
    settings: &RunSettings,
) -> Result<PlanOutcome, AppError> {
    let config = settings.load_config()?;
    let ctx = create_context(settings, &config, std::env::current_dir()?)?;
    commands::plan::execute(&ctx, generator, prompter)
}

/// Run `generator` in the current directory.
pub fn generate<P, F>(
    generator: &str,
    prompter: &mut P,
    settings: &RunSettings,
    on_outcome: F,
) -> Result<GenerateOutcome, AppError>
where
    P: Prompter,
    F: FnMut(&ActionOutcome),
{
    generate_at(std::env::current_dir()?, generator, prompter, settings, on_outcome)
}

/// Run `generator` with `path` as the current directory.
pub fn generate_at<P, F>(
    path: impl Into<PathBuf>,
    generator: &str,
    prompter: &mut P,
    settings: &RunSettings,
    on_outcome: F,
) -> Result<GenerateOutcome, AppError>
where
    P: Prompter,
    F: FnMut(&ActionOutcome),
{
    let path = path.into();
    let config = settings.load_config()?;
    let ctx = create_context(settings, &config, path.clone())?;
    let options = settings.execution_options(&config, path);
    commands::generate::execute(&ctx, generator, prompter, options, on_outcome)
}
