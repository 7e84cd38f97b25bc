//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::wizard::PayloadFormat;

/// stepform - A multi-step form in your terminal.
#[derive(Debug, Parser)]
#[command(name = "stepform")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./stepform.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in the form (default if no command specified)
    Fill(FillArgs),

    /// List the form's steps and fields
    Steps(StepsArgs),

    /// Check a JSON or YAML file of entries against the form's rules
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `fill` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FillArgs {
    /// Answer prompts from STEPFORM_PROMPT_* variables and defaults
    #[arg(long)]
    pub non_interactive: bool,

    /// Format of the submitted payload
    #[arg(long, value_enum)]
    pub format: Option<PayloadFormat>,
}

/// Arguments for the `steps` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StepsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Entries file (.json, .yml or .yaml)
    pub file: PathBuf,

    /// Only check the fields of this step (1-based)
    #[arg(long)]
    pub step: Option<usize>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
