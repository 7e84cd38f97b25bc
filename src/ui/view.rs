//! Step view and navigation actions.
//!
//! The view is a function of the current step: it renders exactly one of
//! the form's pages. Content pages prompt for each of their fields, and the
//! final page shows the completion message.

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::form::{FieldName, FormStore};
use crate::steps::{Step, StepNavigator};

use super::{Prompt, PromptOption, PromptType, Table, UserInterface};

/// Prompt key for the navigation action.
pub const ACTION_KEY: &str = "action";

/// Prompt key for choosing which invalid entry to fix.
pub const FIX_KEY: &str = "fix_entry";

/// A navigation action offered after each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    Fix,
    Quit,
}

impl Action {
    /// Value used in prompts and overrides.
    pub fn value(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Fix => "fix",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" | "finish" => Ok(Self::Next),
            "previous" | "prev" | "back" => Ok(Self::Previous),
            "fix" => Ok(Self::Fix),
            "quit" | "done" => Ok(Self::Quit),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

/// Header line for a step, with the transition arrow when there was one.
pub fn step_title(nav: &StepNavigator) -> String {
    let step = nav.current();
    let arrow = nav.direction().arrow();
    if arrow.is_empty() {
        format!("{} · {}", step.id, step.name)
    } else {
        format!("{} {} · {}", arrow, step.id, step.name)
    }
}

/// Order in which a step's fields are prompted.
///
/// Follows the step's layout, starting at the focused field (if it belongs
/// to the step) and wrapping around.
pub fn field_order(step: &Step, focus: Option<FieldName>) -> Vec<FieldName> {
    let fields = step.prompt_order();
    let start = focus
        .and_then(|f| fields.iter().position(|x| *x == f))
        .unwrap_or(0);
    fields[start..].iter().chain(&fields[..start]).copied().collect()
}

/// Input prompt for a field, defaulting to its current value.
pub fn field_prompt(field: FieldName, store: &FormStore) -> Prompt {
    Prompt {
        key: field.key().to_string(),
        question: field.label().to_string(),
        prompt_type: PromptType::Input,
        default: Some(store.get_value(field).to_string()),
    }
}

/// Field/Value table of a step's current entries.
pub fn values_table(step: &Step, store: &FormStore) -> Table {
    let mut table = Table::new(&["Field", "Value"]);
    for field in step.prompt_order() {
        table.add_row(&[field.label(), store.get_value(*field)]);
    }
    table
}

/// Actions available for the current state, in button order.
pub fn available_actions(nav: &StepNavigator, store: &FormStore) -> Vec<Action> {
    let mut actions = Vec::new();
    if nav.can_advance() {
        actions.push(Action::Next);
    }
    if nav.can_go_back() {
        actions.push(Action::Previous);
    }
    if !store.errors().is_empty() {
        actions.push(Action::Fix);
    }
    actions.push(Action::Quit);
    actions
}

/// Select prompt for the navigation buttons.
pub fn action_prompt(nav: &StepNavigator, store: &FormStore) -> Prompt {
    let options = available_actions(nav, store)
        .into_iter()
        .map(|action| {
            let label = match action {
                Action::Next => nav.next_label(),
                Action::Previous => "Previous",
                Action::Fix => "Fix an entry",
                Action::Quit if nav.can_advance() => "Quit",
                Action::Quit => "Done",
            };
            PromptOption::new(label, action.value())
        })
        .collect();

    let default = if nav.can_advance() {
        Action::Next
    } else {
        Action::Quit
    };

    Prompt {
        key: ACTION_KEY.to_string(),
        question: "What next?".to_string(),
        prompt_type: PromptType::Select { options },
        default: Some(default.value().to_string()),
    }
}

/// Render the current step, collecting input for its fields.
pub fn render_step(
    ui: &mut dyn UserInterface,
    nav: &StepNavigator,
    store: &mut FormStore,
) -> Result<()> {
    let step = nav.current();
    if ui.output_mode().shows_progress() {
        ui.show_header(&step_title(nav));
    }

    if !step.has_fields() {
        ui.success(step.description);
        return Ok(());
    }

    if ui.output_mode().shows_progress() {
        ui.message(step.description);
    }

    let focus = store.take_focus();
    for field in field_order(step, focus) {
        let answer = ui.prompt(&field_prompt(field, store))?.as_string();
        store.set_value(field, answer);
        if let Some(message) = store.error(field) {
            ui.show_field_error(field.label(), message);
        }
    }

    if ui.output_mode().shows_values() {
        ui.message(&values_table(step, store).render());
    }
    Ok(())
}
