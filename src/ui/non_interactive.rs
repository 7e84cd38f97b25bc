//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{FormError, Result};

use super::{
    ErrorSummary, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, StatusKind,
    StepIndicator, UserInterface,
};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "STEPFORM_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `STEPFORM_PROMPT_<KEY>` environment variables,
/// falling back to each prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn override_for(&self, key: &str) -> Option<&String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, key.to_uppercase());
        self.env_overrides.get(&env_key)
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", StatusKind::Warning.format_plain(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let answer = self
            .override_for(&prompt.key)
            .cloned()
            .or_else(|| prompt.default.clone());

        let Some(answer) = answer else {
            return Err(FormError::Other(anyhow::anyhow!(
                "Cannot prompt for '{}' in non-interactive mode (no default value)",
                prompt.key
            )));
        };

        if matches!(prompt.prompt_type, PromptType::Confirm) {
            let val = matches!(answer.to_lowercase().as_str(), "true" | "yes" | "y" | "1");
            return Ok(PromptResult::Bool(val));
        }
        Ok(PromptResult::String(answer))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            println!("  Hint: {}", hint);
        }
    }

    fn show_step_progress(&mut self, steps: &[StepIndicator]) {
        if !self.mode.shows_progress() {
            return;
        }
        let line: Vec<String> = steps
            .iter()
            .map(|s| StatusKind::from(s.state).format_plain(&format!("{} {}", s.id, s.name)))
            .collect();
        println!("{}", line.join("  "));
    }

    fn show_error_summary(&mut self, summary: &ErrorSummary) {
        eprintln!();
        eprintln!("  ┌─ {} ", StatusKind::Warning.format_plain(&summary.title));
        for line in summary.lines() {
            eprintln!("  │ {}", StatusKind::Failed.format_plain(&line));
        }
        eprintln!("  └────────────────────────────────────");
    }

    fn show_field_error(&mut self, label: &str, message: &str) {
        eprintln!("  ↳ {}: {}", label, message);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner replacement that prints the outcome as one line.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn input(key: &str, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Value?".to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&input("city", Some("Porto"))).unwrap();
        assert_eq!(result.as_string(), "Porto");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(ui.prompt(&input("city", None)).is_err());
    }

    #[test]
    fn prompt_uses_env_override_by_uppercased_key() {
        let mut overrides = HashMap::new();
        overrides.insert("STEPFORM_PROMPT_FIRSTNAME".to_string(), "Ada".to_string());

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let result = ui.prompt(&input("firstName", Some(""))).unwrap();
        assert_eq!(result.as_string(), "Ada");
    }

    #[test]
    fn select_prompt_override() {
        let mut overrides = HashMap::new();
        overrides.insert("STEPFORM_PROMPT_ACTION".to_string(), "quit".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt {
            key: "action".to_string(),
            question: "What next?".to_string(),
            prompt_type: PromptType::Select {
                options: vec![
                    PromptOption::new("Next", "next"),
                    PromptOption::new("Quit", "quit"),
                ],
            },
            default: Some("next".to_string()),
        };
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "quit");
    }

    #[test]
    fn confirm_prompt_parses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt {
            key: "confirm_quit".to_string(),
            question: "Quit?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some("true".to_string()),
        };
        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, HashMap::new());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn line_spinner_methods() {
        let mut spinner = LineSpinner {
            mode: OutputMode::Silent,
        };
        spinner.finish_success("done");
        spinner.finish_error("failed");
    }
}
