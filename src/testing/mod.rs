pub mod ports;

#[allow(unused_imports)]
pub use ports::FakeCommandRunner;
#[allow(unused_imports)]
pub use ports::MemoryTemplateStore;
#[allow(unused_imports)]
pub use ports::ScriptedPrompter;
