//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. `fill` runs when no subcommand is given.

pub mod completions;
pub mod dispatcher;
pub mod fill;
pub mod steps;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
