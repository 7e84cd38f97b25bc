//! Step progress indicator.

use crate::steps::Step;

/// Visual state of one step relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Before the current step.
    Completed,
    /// The current step.
    Active,
    /// After the current step.
    Pending,
}

impl StepState {
    /// State of the step at `index` while `current` is shown.
    pub fn of(index: usize, current: usize) -> Self {
        if current > index {
            Self::Completed
        } else if current == index {
            Self::Active
        } else {
            Self::Pending
        }
    }
}

/// One entry of the progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub id: &'static str,
    pub name: &'static str,
    pub state: StepState,
}

/// Build the indicator for every step.
pub fn indicators(steps: &[Step], current: usize) -> Vec<StepIndicator> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| StepIndicator {
            id: step.id,
            name: step.name,
            state: StepState::of(index, current),
        })
        .collect()
}
