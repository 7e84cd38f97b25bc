//! Aggregated error banner.

use crate::form::{ErrorMap, FieldName};

use super::PromptOption;

/// Title shown above the list of invalid entries.
pub const SUMMARY_TITLE: &str = "Please Check your Entries";

/// Every invalid entry, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSummary {
    pub title: &'static str,
    pub entries: Vec<(FieldName, String)>,
}

impl ErrorSummary {
    /// Build a summary from the error map, or `None` when there is nothing to show.
    pub fn from_errors(errors: &ErrorMap) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self {
            title: SUMMARY_TITLE,
            entries: errors
                .iter()
                .map(|(field, message)| (field, message.to_string()))
                .collect(),
        })
    }

    /// Render each entry as `Label: message`.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(field, message)| format!("{}: {}", field.label(), message))
            .collect()
    }

    /// Entries as selectable options whose value is the field key.
    pub fn options(&self) -> Vec<PromptOption> {
        self.entries
            .iter()
            .map(|(field, message)| PromptOption::new(message.clone(), field.key()))
            .collect()
    }
}
