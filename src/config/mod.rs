//! Configuration loading for stepform.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use stepform::config::load_config;
//! use stepform::ui::OutputMode;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("stepform.yml"), "settings:\n  output: quiet\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.settings.output, OutputMode::Quiet);
//! ```
//!
//! # Configuration File Locations
//!
//! The first existing file wins:
//! 1. `stepform.yml`
//! 2. `.stepform/config.yml`
//!
//! `--config <path>` replaces discovery.

pub mod loader;
pub mod schema;

pub use loader::{discover, load_config, load_config_file, parse_config};
pub use schema::{FormConfig, Settings};
