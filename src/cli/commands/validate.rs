//! Validate command implementation.
//!
//! The `stepform validate` command checks a file of entries against the
//! form's rules without prompting.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::args::ValidateArgs;
use crate::error::{FormError, Result};
use crate::form::{ErrorMap, FormValues, RuleTable};
use crate::steps::{step, STEPS};
use crate::ui::{ErrorSummary, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }
}

/// Load entries from a `.json`, `.yml` or `.yaml` file.
pub fn load_values(path: &Path) -> Result<FormValues> {
    let content = fs::read_to_string(path)?;
    let parse_error = |message: String| FormError::ConfigParseError {
        path: path.to_path_buf(),
        message,
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        Some("yml" | "yaml") => {
            serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
        _ => Err(parse_error(
            "unsupported file type (expected .json, .yml or .yaml)".to_string(),
        )),
    }
}

/// Check `values` against one step (1-based) or the whole form.
pub fn check_values(values: &FormValues, step_number: Option<usize>) -> Result<ErrorMap> {
    let rules = RuleTable::standard();
    match step_number {
        Some(n) => {
            let index = n.checked_sub(1).ok_or(FormError::StepOutOfRange {
                index: n,
                len: STEPS.len(),
            })?;
            Ok(rules.validate_subset(step(index)?.fields(), values))
        }
        None => Ok(rules.validate_all(values)),
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let values = load_values(&self.args.file)?;
        let errors = check_values(&values, self.args.step)?;
        debug!(file = %self.args.file.display(), invalid = errors.len(), "validated entries");

        match ErrorSummary::from_errors(&errors) {
            Some(summary) => {
                ui.show_error_summary(&summary);
                Ok(CommandResult::failure(1))
            }
            None => {
                ui.success(&format!("{}: all entries valid", self.args.file.display()));
                Ok(CommandResult::success())
            }
        }
    }
}
