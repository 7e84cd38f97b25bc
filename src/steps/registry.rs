//! Static step registry.

use crate::error::{FormError, Result};
use crate::form::FieldName;

/// One page of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Short label, e.g. "Step 1".
    pub id: &'static str,
    /// Display title.
    pub name: &'static str,
    /// One-line description shown under the title.
    pub description: &'static str,
    /// Fields validated before leaving this step; `None` for the confirmation page.
    pub fields: Option<&'static [FieldName]>,
    /// Prompt order when it differs from `fields`.
    pub layout: Option<&'static [FieldName]>,
}

impl Step {
    /// Fields on this step (empty for the confirmation page).
    pub fn fields(&self) -> &'static [FieldName] {
        self.fields.unwrap_or(&[])
    }

    /// Fields in the order they are prompted.
    pub fn prompt_order(&self) -> &'static [FieldName] {
        self.layout.unwrap_or_else(|| self.fields())
    }

    /// Check whether this step collects input.
    pub fn has_fields(&self) -> bool {
        !self.fields().is_empty()
    }

    /// Check whether a field belongs to this step.
    pub fn contains(&self, field: FieldName) -> bool {
        self.fields().contains(&field)
    }
}

/// The form's steps, in order.
pub static STEPS: &[Step] = &[
    Step {
        id: "Step 1",
        name: "Personal Information",
        description: "Provide your personal details.",
        fields: Some(&[FieldName::FirstName, FieldName::LastName, FieldName::Email]),
        layout: None,
    },
    Step {
        id: "Step 2",
        name: "Address",
        description: "Address where you can receive mail.",
        fields: Some(&[
            FieldName::Country,
            FieldName::State,
            FieldName::City,
            FieldName::Street,
            FieldName::Zip,
        ]),
        layout: Some(&[
            FieldName::Country,
            FieldName::Street,
            FieldName::City,
            FieldName::State,
            FieldName::Zip,
        ]),
    },
    Step {
        id: "Step 3",
        name: "Complete",
        description: "Thank you for your submission.",
        fields: None,
        layout: None,
    },
];

/// Look up a step by index.
pub fn step(index: usize) -> Result<&'static Step> {
    STEPS.get(index).ok_or(FormError::StepOutOfRange {
        index,
        len: STEPS.len(),
    })
}

/// Index of the step that owns a field.
pub fn step_of(field: FieldName) -> Option<usize> {
    STEPS.iter().position(|s| s.contains(field))
}
