//! Form submission.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FormError, Result};
use crate::form::FormValues;
use crate::ui::UserInterface;

/// Receives the whole form once it has passed validation.
pub trait SubmitHandler {
    /// Handle a validated payload.
    fn submit(&mut self, values: &FormValues) -> Result<()>;
}

/// Serialization used for the submitted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    #[default]
    Json,
    Yaml,
}

impl PayloadFormat {
    /// Encode values in this format.
    pub fn encode(self, values: &FormValues) -> Result<String> {
        let encoded = match self {
            Self::Json => serde_json::to_string_pretty(values).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(values).map_err(|e| e.to_string()),
        };
        encoded.map_err(|message| FormError::PayloadEncoding { message })
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Logs the payload and prints it through the UI.
pub struct PayloadLogger<'a> {
    ui: &'a mut dyn UserInterface,
    format: PayloadFormat,
}

impl<'a> PayloadLogger<'a> {
    pub fn new(ui: &'a mut dyn UserInterface, format: PayloadFormat) -> Self {
        Self { ui, format }
    }
}

impl SubmitHandler for PayloadLogger<'_> {
    fn submit(&mut self, values: &FormValues) -> Result<()> {
        let mut spinner = self.ui.start_spinner("Submitting entries");
        let payload = match self.format.encode(values) {
            Ok(payload) => payload,
            Err(e) => {
                spinner.finish_error("Could not encode entries");
                return Err(e);
            }
        };

        info!(format = %self.format, payload = %payload, "form submitted");
        spinner.finish_success("Entries submitted");
        self.ui.message(payload.trim_end());
        Ok(())
    }
}
