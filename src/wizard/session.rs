//! The form's event loop.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::error::{FormError, Result};
use crate::form::{FieldName, FormStore};
use crate::steps::{step_of, NextOutcome, StepNavigator};
use crate::ui::progress::indicators;
use crate::ui::view::{action_prompt, render_step, Action, FIX_KEY};
use crate::ui::{hints, ErrorSummary, Prompt, PromptType, UserInterface};

use super::submit::{PayloadFormat, PayloadLogger};

/// Prompt key for confirming a quit with unsaved entries.
pub const CONFIRM_QUIT_KEY: &str = "confirm_quit";

/// What happened during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Number of times the form was submitted.
    pub submissions: usize,
    /// Step index when the session ended.
    pub final_step: usize,
    /// Number of field edits made by the user.
    pub edits: usize,
}

/// Drives one form from the first step until the user quits.
pub struct FormSession<'a> {
    ui: &'a mut dyn UserInterface,
    store: FormStore,
    navigator: StepNavigator,
    format: PayloadFormat,
    edits: Rc<Cell<usize>>,
}

impl<'a> FormSession<'a> {
    /// Create a session over the standard steps and rules.
    pub fn new(ui: &'a mut dyn UserInterface, format: PayloadFormat) -> Self {
        Self::with_parts(ui, FormStore::default(), StepNavigator::default(), format)
    }

    /// Create a session from an existing store and navigator.
    pub fn with_parts(
        ui: &'a mut dyn UserInterface,
        mut store: FormStore,
        navigator: StepNavigator,
        format: PayloadFormat,
    ) -> Self {
        let edits = Rc::new(Cell::new(0));
        for field in FieldName::ALL {
            let edits = Rc::clone(&edits);
            store.subscribe(field, move |event| {
                if !event.reset {
                    edits.set(edits.get() + 1);
                }
            });
        }

        Self {
            ui,
            store,
            navigator,
            format,
            edits,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    /// Run until the user quits.
    ///
    /// In non-interactive mode a step that fails validation ends the session
    /// with [`FormError::ValidationFailed`].
    pub fn run(&mut self) -> Result<SessionReport> {
        let interactive = self.ui.is_interactive();
        let mut submissions = 0;

        loop {
            if self.ui.output_mode().shows_progress() {
                let steps = indicators(self.navigator.steps(), self.navigator.current_step());
                self.ui.show_step_progress(&steps);
            }
            if let Some(summary) = ErrorSummary::from_errors(self.store.errors()) {
                self.ui.show_error_summary(&summary);
            }

            render_step(&mut *self.ui, &self.navigator, &mut self.store)?;

            let answer = self
                .ui
                .prompt(&action_prompt(&self.navigator, &self.store))?
                .as_string();
            let action: Action = answer
                .parse()
                .map_err(|e: String| FormError::Other(anyhow::anyhow!(e)))?;
            debug!(step = self.navigator.current_step(), %action, "action chosen");

            if !interactive && matches!(action, Action::Previous | Action::Fix) {
                return Err(FormError::Other(anyhow::anyhow!(
                    "'{}' is not available in non-interactive mode",
                    action
                )));
            }

            match action {
                Action::Next => {
                    if self.advance(interactive)? {
                        submissions += 1;
                    }
                }
                Action::Previous => {
                    self.navigator.prev();
                }
                Action::Fix => self.fix_entry()?,
                Action::Quit => {
                    if self.confirm_quit(interactive)? {
                        break;
                    }
                }
            }
        }

        Ok(SessionReport {
            submissions,
            final_step: self.navigator.current_step(),
            edits: self.edits.get(),
        })
    }

    /// Handle "Next". Returns whether the form was submitted.
    fn advance(&mut self, interactive: bool) -> Result<bool> {
        let mut handler = PayloadLogger::new(&mut *self.ui, self.format);
        let outcome = self.navigator.next(&mut self.store, &mut handler)?;

        match outcome {
            NextOutcome::Blocked(errors) => {
                debug!(invalid = errors.len(), "step blocked");
                if interactive {
                    self.ui.show_hint(hints::after_blocked());
                    return Ok(false);
                }
                if let Some(summary) = ErrorSummary::from_errors(&errors) {
                    self.ui.show_error_summary(&summary);
                }
                for (field, _) in errors.iter() {
                    self.ui.show_hint(&hints::provide_override(field));
                }
                Err(FormError::ValidationFailed {
                    errors: errors.describe(),
                })
            }
            NextOutcome::Submitted(_) => {
                self.ui.show_hint(hints::after_submission());
                Ok(true)
            }
            NextOutcome::Advanced | NextOutcome::AtEnd => Ok(false),
        }
    }

    fn fix_entry(&mut self) -> Result<()> {
        let Some(summary) = ErrorSummary::from_errors(self.store.errors()) else {
            return Ok(());
        };
        let default = summary.entries.first().map(|(field, _)| field.key().to_string());
        let prompt = Prompt {
            key: FIX_KEY.to_string(),
            question: summary.title.to_string(),
            prompt_type: PromptType::Select {
                options: summary.options(),
            },
            default,
        };

        let field: FieldName = self.ui.prompt(&prompt)?.as_string().parse()?;
        debug!(%field, "focus requested from error summary");
        // The whole-form check on Finish can report fields of an earlier step.
        if let Some(owner) = step_of(field) {
            self.navigator.jump_to(owner);
        }
        self.store.set_focus(field);
        Ok(())
    }

    fn confirm_quit(&mut self, interactive: bool) -> Result<bool> {
        let has_entries = FieldName::ALL.iter().any(|f| self.store.is_dirty(*f));
        if !self.navigator.current().has_fields() || !has_entries {
            return Ok(true);
        }

        let prompt = Prompt {
            key: CONFIRM_QUIT_KEY.to_string(),
            question: "Discard your entries and quit?".to_string(),
            prompt_type: PromptType::Confirm,
            default: Some((!interactive).to_string()),
        };
        let discard = self.ui.prompt(&prompt)?.as_bool().unwrap_or(false);
        if discard {
            self.ui.warning("Unsubmitted entries were discarded");
        }
        Ok(discard)
    }
}
