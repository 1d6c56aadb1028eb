//! Data models for address book entities.
//!
//! This module contains the person aggregate and the change notifications it
//! emits to observers.

pub mod change;
pub mod person;

pub use change::{ChangeListener, ChangeListeners, PersonChange, PersonField, SubscriptionId};
pub use person::{sort_by_name, Person, PersonBuilder, ReadOnlyPerson};
