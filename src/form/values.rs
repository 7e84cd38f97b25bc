//! Form values record.

use serde::{Deserialize, Serialize};

use super::FieldName;

/// The eight string values collected by the form.
///
/// Serializes with camelCase keys, so the payload matches the field keys
/// used everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub street: String,
    pub zip: String,
}

impl FormValues {
    /// Get the value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Country => &self.country,
            FieldName::State => &self.state,
            FieldName::City => &self.city,
            FieldName::Street => &self.street,
            FieldName::Zip => &self.zip,
        }
    }

    /// Set the value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Country => &mut self.country,
            FieldName::State => &mut self.state,
            FieldName::City => &mut self.city,
            FieldName::Street => &mut self.street,
            FieldName::Zip => &mut self.zip,
        };
        *slot = value.into();
    }

    /// Builder-style setter, mostly for tests and fixtures.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Check whether every field is an empty string.
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
