//! Field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A single named input of the form.
///
/// Declaration order is the order fields appear in the form, and it is
/// also the order errors are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Country,
    State,
    City,
    Street,
    Zip,
}

impl FieldName {
    /// Every field, in form order.
    pub const ALL: [FieldName; 8] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Country,
        FieldName::State,
        FieldName::City,
        FieldName::Street,
        FieldName::Zip,
    ];

    /// Wire key used in payloads, prompt keys, and values files.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Country => "country",
            Self::State => "state",
            Self::City => "city",
            Self::Street => "street",
            Self::Zip => "zip",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Country => "Country",
            Self::State => "State",
            Self::City => "City",
            Self::Street => "Street",
            Self::Zip => "Postal Code",
        }
    }

    /// Autocomplete hint for the input.
    pub fn autocomplete(self) -> &'static str {
        match self {
            Self::FirstName => "given-name",
            Self::LastName => "family-name",
            Self::Email => "email",
            Self::Country => "country-name",
            Self::State => "address-level1",
            Self::City => "address-level2",
            Self::Street => "street-address",
            Self::Zip => "postal-code",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::UnknownField {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_camel_case() {
        assert_eq!(FieldName::FirstName.key(), "firstName");
        assert_eq!(FieldName::Zip.key(), "zip");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("firstname".parse::<FieldName>().unwrap(), FieldName::FirstName);
        assert_eq!("STREET".parse::<FieldName>().unwrap(), FieldName::Street);
    }

    #[test]
    fn parse_unknown_field_fails() {
        let err = "middleName".parse::<FieldName>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField { .. }));
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut shuffled = vec![FieldName::Zip, FieldName::Email, FieldName::FirstName];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![FieldName::FirstName, FieldName::Email, FieldName::Zip]
        );
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&FieldName::LastName).unwrap();
        assert_eq!(json, "\"lastName\"");
    }

    #[test]
    fn labels_match_the_form() {
        let labels: Vec<_> = FieldName::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "First name",
                "Last name",
                "Email",
                "Country",
                "State",
                "City",
                "Street",
                "Postal Code",
            ]
        );
    }

    #[test]
    fn every_field_has_label_and_hint() {
        for field in FieldName::ALL {
            assert!(!field.label().is_empty());
            assert!(!field.autocomplete().is_empty());
        }
    }
}
