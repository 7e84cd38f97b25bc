//! Command-line interface for stepform.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, FillArgs, StepsArgs, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
