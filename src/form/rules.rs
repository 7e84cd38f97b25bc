//! Validation rule table.
//!
//! Each field maps to an ordered list of [`Rule`]s. A rule is a pure
//! predicate over the field's string value that returns an error message
//! when the value is invalid. The table composes these into per-field,
//! subset, and whole-form validators. The whole-form validator is exactly
//! the union of the per-field rules; there are no cross-field rules.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::{ErrorMap, FieldName, FormValues};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").unwrap());

/// A single validation predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain something other than whitespace.
    Required(String),
    /// Non-empty value must look like `local@domain.tld`.
    Email(String),
}

impl Rule {
    /// Check a value, returning the error message if it fails.
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::Required(message) => value.trim().is_empty().then(|| message.clone()),
            Self::Email(message) => {
                (!value.is_empty() && !EMAIL_REGEX.is_match(value)).then(|| message.clone())
            }
        }
    }
}

/// Rules keyed by field.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: BTreeMap<FieldName, Vec<Rule>>,
}

impl RuleTable {
    /// Create an empty table (every value is valid).
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules for the personal-information and address form.
    pub fn standard() -> Self {
        let required = [
            (FieldName::FirstName, "First name is required"),
            (FieldName::LastName, "Last name is required"),
            (FieldName::Email, "Email is required"),
            (FieldName::Country, "Country is required"),
            (FieldName::State, "State is required"),
            (FieldName::City, "City is required"),
            (FieldName::Street, "Street is required"),
            (FieldName::Zip, "Zip is required"),
        ];

        let mut table = Self::new();
        for (field, message) in required {
            table.add(field, Rule::Required(message.to_string()));
        }
        table.add(
            FieldName::Email,
            Rule::Email("Invalid email address".to_string()),
        );
        table
    }

    /// Append a rule for a field. Rules run in insertion order.
    pub fn add(&mut self, field: FieldName, rule: Rule) {
        self.rules.entry(field).or_default().push(rule);
    }

    /// Rules registered for a field.
    pub fn rules_for(&self, field: FieldName) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Validate one field; the first failing rule wins.
    pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<String> {
        let value = values.get(field);
        self.rules_for(field).iter().find_map(|rule| rule.check(value))
    }

    /// Validate only the given fields.
    pub fn validate_subset(&self, fields: &[FieldName], values: &FormValues) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in fields {
            if let Some(message) = self.validate_field(*field, values) {
                errors.insert(*field, message);
            }
        }
        errors
    }

    /// Validate the whole form.
    pub fn validate_all(&self, values: &FormValues) -> ErrorMap {
        self.validate_subset(&FieldName::ALL, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        FormValues::default()
            .with(FieldName::FirstName, "Ada")
            .with(FieldName::LastName, "Lovelace")
            .with(FieldName::Email, "ada@example.com")
            .with(FieldName::Country, "United Kingdom")
            .with(FieldName::State, "Greater London")
            .with(FieldName::City, "London")
            .with(FieldName::Street, "12 St James's Square")
            .with(FieldName::Zip, "SW1Y 4JH")
    }

    #[test]
    fn required_rejects_blank() {
        let rule = Rule::Required("required".into());
        assert_eq!(rule.check(""), Some("required".into()));
        assert_eq!(rule.check("   "), Some("required".into()));
        assert_eq!(rule.check("x"), None);
    }

    #[test]
    fn email_rule_checks_shape() {
        let rule = Rule::Email("bad".into());
        assert_eq!(rule.check("ada@example.com"), None);
        assert_eq!(rule.check("ada@example"), Some("bad".into()));
        assert_eq!(rule.check("ada example.com"), Some("bad".into()));
        assert_eq!(rule.check("@example.com"), Some("bad".into()));
    }

    #[test]
    fn email_rule_ignores_empty_values() {
        assert_eq!(Rule::Email("bad".into()).check(""), None);
    }

    #[test]
    fn empty_email_reports_required_first() {
        let table = RuleTable::standard();
        let msg = table.validate_field(FieldName::Email, &FormValues::default());
        assert_eq!(msg.as_deref(), Some("Email is required"));
    }

    #[test]
    fn malformed_email_reports_format() {
        let table = RuleTable::standard();
        let values = FormValues::default().with(FieldName::Email, "not-an-email");
        let msg = table.validate_field(FieldName::Email, &values);
        assert_eq!(msg.as_deref(), Some("Invalid email address"));
    }

    #[test]
    fn subset_only_reports_requested_fields() {
        let table = RuleTable::standard();
        let errors = table.validate_subset(
            &[FieldName::FirstName, FieldName::LastName],
            &FormValues::default(),
        );
        assert_eq!(errors.len(), 2);
        assert!(!errors.contains(FieldName::Email));
    }

    #[test]
    fn validate_all_on_empty_form_reports_every_field() {
        let errors = RuleTable::standard().validate_all(&FormValues::default());
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn validate_all_on_filled_form_passes() {
        assert!(RuleTable::standard().validate_all(&filled()).is_empty());
    }

    #[test]
    fn empty_table_accepts_everything() {
        let table = RuleTable::new();
        assert!(table.rules_for(FieldName::Zip).is_empty());
        assert!(table.validate_all(&FormValues::default()).is_empty());
    }
}
