//! Contextual hint text.
//!
//! Suggests the logical next action based on what just happened in the form.

use crate::form::FieldName;

/// Hint after a step failed validation.
pub fn after_blocked() -> &'static str {
    "Choose \"Fix an entry\" to jump to an invalid field."
}

/// Hint after the form was submitted.
pub fn after_submission() -> &'static str {
    "Your entries were submitted and the form has been reset. Choose \"Done\" to close it."
}

/// Hint when a field has no value in non-interactive mode.
pub fn provide_override(field: FieldName) -> String {
    format!(
        "Set STEPFORM_PROMPT_{} to provide a value for {}.",
        field.key().to_uppercase(),
        field.label().to_lowercase()
    )
}
