//! stepform - A multi-step form with per-step validation.
//!
//! The form collects personal details and a postal address over three
//! pages. Each page is validated before the next one is shown, invalid
//! entries are listed in an error summary, and a progress indicator shows
//! where the user is.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading
//! - [`error`] - Error types and result aliases
//! - [`form`] - Field values, validation rules, and the observable form store
//! - [`steps`] - Step registry and navigation
//! - [`ui`] - Prompts, progress indicator, error summary, and terminal output
//! - [`wizard`] - The form session and submission handling
//!
//! # Example
//!
//! ```
//! use stepform::form::{FieldName, FormValues, RuleTable};
//! use stepform::wizard::PayloadFormat;
//!
//! let values = FormValues::default()
//!     .with(FieldName::FirstName, "Ada")
//!     .with(FieldName::Email, "ada@");
//!
//! let errors = RuleTable::standard().validate_all(&values);
//! assert_eq!(errors.first(), Some(FieldName::LastName));
//! assert_eq!(errors.get(FieldName::Email), Some("Invalid email address"));
//!
//! let json = PayloadFormat::Json.encode(&values).unwrap();
//! assert!(json.contains("\"firstName\": \"Ada\""));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod steps;
pub mod ui;
pub mod wizard;

pub use error::{FormError, Result};
