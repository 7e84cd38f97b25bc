//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, ErrorSummary, FormTheme, NonInteractiveUI, OutputMode,
    ProgressSpinner, Prompt, PromptResult, SpinnerHandle, StatusKind, StepIndicator, StepState,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: FormTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            FormTheme::new()
        } else {
            FormTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_step_progress(&mut self, steps: &[StepIndicator]) {
        if !self.mode.shows_progress() {
            return;
        }
        let items: Vec<String> = steps
            .iter()
            .map(|s| {
                let icon = StatusKind::from(s.state).styled(&self.theme);
                let label = match s.state {
                    StepState::Active => self.theme.active.apply_to(s.id).to_string(),
                    StepState::Completed => self.theme.highlight.apply_to(s.id).to_string(),
                    StepState::Pending => self.theme.dim.apply_to(s.id).to_string(),
                };
                format!("{} {} {}", icon, label, s.name)
            })
            .collect();
        let separator = self.theme.border.apply_to(" ── ").to_string();
        writeln!(self.term, "\n  {}", items.join(&separator)).ok();
    }

    fn show_error_summary(&mut self, summary: &ErrorSummary) {
        let b = &self.theme.border;
        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            self.theme
                .error
                .apply_to(format!("{} {}", StatusKind::Warning.icon(), summary.title))
        )
        .ok();
        for line in summary.lines() {
            writeln!(
                self.term,
                "  {} {} {}",
                b.apply_to("│"),
                StatusKind::Failed.styled(&self.theme),
                self.theme.field_error.apply_to(line)
            )
            .ok();
        }
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn show_field_error(&mut self, label: &str, message: &str) {
        writeln!(self.term, "{}", self.theme.format_field_error(label, message)).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
