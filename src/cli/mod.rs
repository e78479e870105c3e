//! Interactive shell helpers around the simulation engine.

pub mod commands;
pub mod prompt;

pub use commands::{forward_commands, spawn_command_reader, COMMAND_HINT};
pub use prompt::prompt_run_config;
