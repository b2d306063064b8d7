pub mod action_executor;
mod atomic_file;
mod dialoguer_prompter;
mod directory_template_store;
mod embedded_template_store;
mod preset_prompter;
mod shell_command_runner;
mod template_renderer;

pub use action_executor::{ActionExecutor, ExecutionOptions};
pub use atomic_file::atomic_write;
pub use dialoguer_prompter::DialoguerPrompter;
pub use directory_template_store::DirectoryTemplateStore;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use preset_prompter::PresetPrompter;
pub use shell_command_runner::ShellCommandRunner;
pub use template_renderer::TemplateRenderer;
