//! Form state store.
//!
//! [`FormStore`] owns the live field values, the error map, focus, and
//! dirty tracking. Consumers observe it explicitly: [`FormStore::subscribe`]
//! registers a listener for one field, and every value change or reset of
//! that field notifies it with a [`FieldEvent`].

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use super::{ErrorMap, FieldName, FormValues, RuleTable};

/// Notification delivered to field subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEvent<'a> {
    /// Field that changed.
    pub field: FieldName,
    /// New value.
    pub value: &'a str,
    /// Current validation message for the field, if invalid.
    pub error: Option<&'a str>,
    /// Whether this change came from [`FormStore::reset`].
    pub reset: bool,
}

/// Handle returned by [`FormStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FieldEvent<'_>)>;

struct Subscription {
    id: SubscriptionId,
    field: FieldName,
    listener: Listener,
}

/// Live state of one form.
pub struct FormStore {
    rules: RuleTable,
    initial: FormValues,
    values: FormValues,
    errors: ErrorMap,
    focused: Option<FieldName>,
    dirty: BTreeSet<FieldName>,
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
}

impl fmt::Debug for FormStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStore")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("focused", &self.focused)
            .field("dirty", &self.dirty)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new(RuleTable::standard())
    }
}

impl FormStore {
    /// Create a store with empty initial values.
    pub fn new(rules: RuleTable) -> Self {
        Self::with_initial(rules, FormValues::default())
    }

    /// Create a store whose initial (and reset) values are `initial`.
    pub fn with_initial(rules: RuleTable, initial: FormValues) -> Self {
        Self {
            rules,
            values: initial.clone(),
            initial,
            errors: ErrorMap::new(),
            focused: None,
            dirty: BTreeSet::new(),
            subscriptions: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current value of a field.
    pub fn get_value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    /// Snapshot of every value.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Update a field.
    ///
    /// A changed value marks the field dirty, re-validates that field alone,
    /// and notifies its subscribers. Setting the same value is a no-op.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        if self.values.get(field) == value {
            return;
        }

        self.values.set(field, value);
        if self.values.get(field) == self.initial.get(field) {
            self.dirty.remove(&field);
        } else {
            self.dirty.insert(field);
        }

        let fresh = self.rules.validate_subset(&[field], &self.values);
        self.errors.replace_subset(&[field], fresh);
        debug!(
            field = field.key(),
            valid = !self.errors.contains(field),
            "field changed"
        );

        self.notify(field, false);
    }

    /// Validate `fields` without changing their values.
    pub fn validate(&self, fields: &[FieldName]) -> ErrorMap {
        self.rules.validate_subset(fields, &self.values)
    }

    /// Validate only `fields`, replacing their entries in the error map.
    ///
    /// Returns whether every named field is valid. On failure with
    /// `should_focus`, focus moves to the first invalid field in `fields`
    /// order.
    pub fn trigger(&mut self, fields: &[FieldName], should_focus: bool) -> bool {
        let fresh = self.validate(fields);
        let first_invalid = fields.iter().copied().find(|f| fresh.contains(*f));
        let valid = fresh.is_empty();
        self.errors.replace_subset(fields, fresh);

        debug!(fields = fields.len(), valid, "trigger");

        if let (Some(field), true) = (first_invalid, should_focus) {
            self.set_focus(field);
        }
        valid
    }

    /// Validate the whole form and call `on_valid` with the values if it passes.
    ///
    /// The error map is replaced with the whole-form result. When invalid,
    /// `on_valid` is not called and focus moves to the first invalid field.
    pub fn handle_submit<R>(&mut self, on_valid: impl FnOnce(&FormValues) -> R) -> Option<R> {
        self.errors = self.rules.validate_all(&self.values);
        if let Some(field) = self.errors.first() {
            debug!(errors = self.errors.len(), "submit rejected");
            self.set_focus(field);
            return None;
        }
        debug!("submit accepted");
        Some(on_valid(&self.values))
    }

    /// Current errors.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Inline message for one field.
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// Restore initial values and clear errors, focus, and dirty state.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.focused = None;
        self.dirty.clear();
        debug!("form reset");
        for field in FieldName::ALL {
            self.notify(field, true);
        }
    }

    /// Request input focus for a field.
    pub fn set_focus(&mut self, field: FieldName) {
        self.focused = Some(field);
    }

    /// Field that currently has focus.
    pub fn focused(&self) -> Option<FieldName> {
        self.focused
    }

    /// Consume the focus request.
    pub fn take_focus(&mut self) -> Option<FieldName> {
        self.focused.take()
    }

    /// Check whether a field differs from its initial value.
    pub fn is_dirty(&self, field: FieldName) -> bool {
        self.dirty.contains(&field)
    }

    /// Register a listener for one field.
    pub fn subscribe(
        &mut self,
        field: FieldName,
        listener: impl FnMut(&FieldEvent<'_>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.push(Subscription {
            id,
            field,
            listener: Box::new(listener),
        });
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    fn notify(&mut self, field: FieldName, reset: bool) {
        let event = FieldEvent {
            field,
            value: self.values.get(field),
            error: self.errors.get(field),
            reset,
        };
        for sub in self.subscriptions.iter_mut().filter(|s| s.field == field) {
            (sub.listener)(&event);
        }
    }
}
