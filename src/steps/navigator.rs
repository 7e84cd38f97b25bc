//! Step navigation.
//!
//! [`StepNavigator`] owns the current and previous step indices. Moving
//! forward validates the current step's fields through the [`FormStore`];
//! moving back never validates. Leaving the last content step submits the
//! whole form through a [`SubmitHandler`].

use tracing::debug;

use crate::error::Result;
use crate::form::{ErrorMap, FormStore, FormValues};
use crate::wizard::SubmitHandler;

use super::registry::{Step, STEPS};

/// Direction of the most recent transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Moved to a later step.
    Forward,
    /// Moved to an earlier step.
    Backward,
    /// No transition yet.
    Still,
}

impl Direction {
    /// Arrow shown in the step header.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Forward => "→",
            Self::Backward => "←",
            Self::Still => "",
        }
    }
}

/// Result of [`StepNavigator::next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// Validation failed; the step did not change.
    Blocked(ErrorMap),
    /// Moved to the next step.
    Advanced,
    /// The form was submitted and reset, then the step advanced.
    Submitted(FormValues),
    /// Already on the last step.
    AtEnd,
}

/// Current/previous step indices over a step registry.
#[derive(Debug, Clone)]
pub struct StepNavigator {
    steps: &'static [Step],
    current: usize,
    previous: usize,
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::new(STEPS)
    }
}

impl StepNavigator {
    /// Create a navigator at the first step.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty.
    pub fn new(steps: &'static [Step]) -> Self {
        assert!(!steps.is_empty(), "a form needs at least one step");
        Self {
            steps,
            current: 0,
            previous: 0,
        }
    }

    /// All steps.
    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Index of the current step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Index of the step before the last transition.
    pub fn previous_step(&self) -> usize {
        self.previous
    }

    /// The current step.
    pub fn current(&self) -> &'static Step {
        &self.steps[self.current]
    }

    /// Signed distance of the last transition.
    pub fn delta(&self) -> isize {
        self.current as isize - self.previous as isize
    }

    /// Direction of the last transition.
    pub fn direction(&self) -> Direction {
        match self.delta() {
            d if d > 0 => Direction::Forward,
            d if d < 0 => Direction::Backward,
            _ => Direction::Still,
        }
    }

    /// Whether "Previous" is enabled.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Whether "Next"/"Finish" is enabled.
    pub fn can_advance(&self) -> bool {
        self.current + 1 < self.steps.len()
    }

    /// Whether the current step is the one whose completion submits the form.
    pub fn is_submit_step(&self) -> bool {
        self.current + 2 == self.steps.len()
    }

    /// Label of the forward button.
    pub fn next_label(&self) -> &'static str {
        if self.current > 0 {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Validate the current step and move forward.
    ///
    /// On the submit step the whole form is validated again and, if valid,
    /// handed to `handler` exactly once. The store is reset only after the
    /// handler succeeds.
    pub fn next(
        &mut self,
        store: &mut FormStore,
        handler: &mut dyn SubmitHandler,
    ) -> Result<NextOutcome> {
        if !self.can_advance() {
            return Ok(NextOutcome::AtEnd);
        }

        let fields = self.current().fields();
        if !store.trigger(fields, true) {
            debug!(step = self.current, "next blocked by validation");
            return Ok(NextOutcome::Blocked(store.errors().clone()));
        }

        if self.is_submit_step() {
            let submitted =
                store.handle_submit(|values| handler.submit(values).map(|()| values.clone()));
            let values = match submitted {
                Some(result) => result?,
                None => return Ok(NextOutcome::Blocked(store.errors().clone())),
            };
            store.reset();
            self.go_to(self.current + 1);
            return Ok(NextOutcome::Submitted(values));
        }

        self.go_to(self.current + 1);
        Ok(NextOutcome::Advanced)
    }

    /// Move back one step without validating. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.go_to(self.current - 1);
        true
    }

    /// Return to an earlier step without validating. Returns whether it moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.current {
            return false;
        }
        self.go_to(index);
        true
    }

    fn go_to(&mut self, index: usize) {
        debug!(from = self.current, to = index, "step transition");
        self.previous = self.current;
        self.current = index;
    }
}
