//! Change notification for person attributes.
//!
//! Observers register a callback for one attribute (or for all of them) and
//! are invoked synchronously, on the mutating thread, after each successful
//! mutation and before the setter returns.

use crate::domain::{Address, CustomField, Email, Gender, Name, Phone, SecondaryPhone, Tag};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// The attributes of a person that can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Phone,
    Email,
    Address,
    Gender,
    SecondaryPhone,
    Tags,
    CustomFields,
}

impl PersonField {
    pub const ALL: [PersonField; 8] = [
        PersonField::Name,
        PersonField::Phone,
        PersonField::Email,
        PersonField::Address,
        PersonField::Gender,
        PersonField::SecondaryPhone,
        PersonField::Tags,
        PersonField::CustomFields,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Gender => "gender",
            Self::SecondaryPhone => "secondary_phone",
            Self::Tags => "tags",
            Self::CustomFields => "custom_fields",
        }
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful mutation, carrying the attribute's new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonChange {
    Name(Name),
    Phone(Phone),
    Email(Email),
    Address(Address),
    Gender(Gender),
    SecondaryPhone(SecondaryPhone),
    Tags(HashSet<Tag>),
    CustomFields(HashSet<CustomField>),
}

impl PersonChange {
    /// The attribute this change applies to.
    pub fn field(&self) -> PersonField {
        match self {
            Self::Name(_) => PersonField::Name,
            Self::Phone(_) => PersonField::Phone,
            Self::Email(_) => PersonField::Email,
            Self::Address(_) => PersonField::Address,
            Self::Gender(_) => PersonField::Gender,
            Self::SecondaryPhone(_) => PersonField::SecondaryPhone,
            Self::Tags(_) => PersonField::Tags,
            Self::CustomFields(_) => PersonField::CustomFields,
        }
    }
}

/// Callback invoked with each change.
pub type ChangeListener = Arc<dyn Fn(&PersonChange) + Send + Sync>;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    // None means every field
    field: Option<PersonField>,
    listener: ChangeListener,
}

/// Registry of change listeners owned by a single person.
#[derive(Default)]
pub struct ChangeListeners {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one attribute.
    pub fn subscribe(&mut self, field: PersonField, listener: ChangeListener) -> SubscriptionId {
        self.push(Some(field), listener)
    }

    /// Register a listener for every attribute.
    pub fn subscribe_all(&mut self, listener: ChangeListener) -> SubscriptionId {
        self.push(None, listener)
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Whether any listener would receive a change to `field`.
    pub fn is_watching(&self, field: PersonField) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.field.map_or(true, |f| f == field))
    }

    /// Deliver `change` to every matching listener, in subscription order.
    pub fn notify(&self, change: &PersonChange) {
        let field = change.field();
        for subscription in &self.subscriptions {
            if subscription.field.map_or(true, |f| f == field) {
                (subscription.listener)(change);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    fn push(&mut self, field: Option<PersonField>, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            field,
            listener,
        });
        id
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
