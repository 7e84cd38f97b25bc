//! Form state, values, and validation.
//!
//! - [`FieldName`] - the closed set of form fields
//! - [`FormValues`] - the eight string values
//! - [`RuleTable`] - per-field validation predicates
//! - [`ErrorMap`] - invalid fields and their messages
//! - [`FormStore`] - live state with focus, dirty tracking, and subscriptions

pub mod errors;
pub mod field;
pub mod rules;
pub mod store;
pub mod values;

pub use errors::ErrorMap;
pub use field::FieldName;
pub use rules::{Rule, RuleTable};
pub use store::{FieldEvent, FormStore, SubscriptionId};
pub use values::FormValues;
