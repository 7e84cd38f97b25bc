//! Step registry and navigation.
//!
//! - [`Step`] / [`STEPS`] - the static, ordered pages of the form
//! - [`StepNavigator`] - current/previous indices and validated transitions
//!
//! # Example
//!
//! ```
//! use stepform::form::{FieldName, FormStore, FormValues};
//! use stepform::steps::{NextOutcome, StepNavigator};
//! use stepform::wizard::SubmitHandler;
//!
//! struct Discard;
//!
//! impl SubmitHandler for Discard {
//!     fn submit(&mut self, _values: &FormValues) -> stepform::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut nav = StepNavigator::default();
//! let mut store = FormStore::default();
//!
//! // Empty required fields keep the form on the first step.
//! let outcome = nav.next(&mut store, &mut Discard).unwrap();
//! assert!(matches!(outcome, NextOutcome::Blocked(_)));
//! assert_eq!(store.focused(), Some(FieldName::FirstName));
//! ```

pub mod navigator;
pub mod registry;

pub use navigator::{Direction, NextOutcome, StepNavigator};
pub use registry::{step, step_of, Step, STEPS};
