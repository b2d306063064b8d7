pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod generators;
pub mod logging;
pub mod prompt_flow;

pub use context::AppContext;
