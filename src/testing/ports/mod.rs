mod command_runner_stub;
mod prompter_stub;
mod template_store_stub;

pub use self::command_runner_stub::FakeCommandRunner;
pub use self::prompter_stub::ScriptedPrompter;
pub use self::template_store_stub::MemoryTemplateStore;
