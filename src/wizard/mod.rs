//! Interactive form session.
//!
//! - [`FormSession`] runs the render/prompt/navigate loop over a [`FormStore`](crate::form::FormStore)
//! - [`SubmitHandler`] receives the validated form; [`PayloadLogger`] is the shipped handler

pub mod session;
pub mod submit;

pub use session::{FormSession, SessionReport, CONFIRM_QUIT_KEY};
pub use submit::{PayloadFormat, PayloadLogger, SubmitHandler};
