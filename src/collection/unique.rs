//! A set-like collection that rejects duplicate members.
//!
//! Membership is decided by each element's uniqueness key rather than by
//! full equality, so two custom fields with the same name collide even when
//! their values differ.

use crate::error::{DuplicateElementError, NotFoundError};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::slice;

/// An element that can live in a [`UniqueCollection`].
pub trait UniqueElement {
    /// Element kind used in error messages, e.g. "tag".
    const KIND: &'static str;

    /// The key under which two elements are considered duplicates.
    fn unique_key(&self) -> &str;
}

/// A collection of elements with pairwise-distinct uniqueness keys.
///
/// Elements keep their insertion order, which is used by [`to_vec`] and for
/// serialization. Equality and hashing ignore order.
///
/// Callers never receive a mutable view of the contents: [`to_set`] and
/// [`to_vec`] return independent snapshots.
///
/// [`to_set`]: UniqueCollection::to_set
/// [`to_vec`]: UniqueCollection::to_vec
#[derive(Debug, Clone)]
pub struct UniqueCollection<T> {
    items: Vec<T>,
    keys: HashSet<String>,
}

impl<T: UniqueElement> UniqueCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Build a collection from caller-supplied items.
    ///
    /// Uniqueness is re-checked here regardless of the source container.
    /// On a duplicate nothing is constructed.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateElementError` naming the first repeated key.
    pub fn from_items<I>(items: I) -> Result<Self, DuplicateElementError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::new();
        for item in items {
            collection.add(item)?;
        }
        Ok(collection)
    }

    /// Add an element.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateElementError` if an element with the same key is
    /// already present; the collection is left unchanged.
    pub fn add(&mut self, item: T) -> Result<(), DuplicateElementError> {
        let key = item.unique_key();
        if self.keys.contains(key) {
            tracing::debug!(kind = T::KIND, key = %key, "Rejected duplicate element");
            return Err(DuplicateElementError {
                kind: T::KIND,
                key: key.to_string(),
            });
        }
        self.keys.insert(key.to_string());
        self.items.push(item);
        Ok(())
    }

    /// Remove the member sharing `item`'s key and return it.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError` if no member has that key.
    pub fn remove(&mut self, item: &T) -> Result<T, NotFoundError> {
        let key = item.unique_key();
        let position = self
            .items
            .iter()
            .position(|member| member.unique_key() == key)
            .ok_or_else(|| NotFoundError {
                kind: T::KIND,
                key: key.to_string(),
            })?;
        self.keys.remove(key);
        Ok(self.items.remove(position))
    }

    /// Check whether an element with `item`'s key is a member.
    pub fn contains(&self, item: &T) -> bool {
        self.keys.contains(item.unique_key())
    }

    /// Look up a member by key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|member| member.unique_key() == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the members in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: UniqueElement + Clone> UniqueCollection<T> {
    /// Snapshot of the members in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: UniqueElement + Clone + Eq + Hash> UniqueCollection<T> {
    /// Snapshot of the members as a set.
    pub fn to_set(&self) -> HashSet<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: UniqueElement> Default for UniqueCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: UniqueElement + PartialEq> PartialEq for UniqueCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .all(|item| other.get(item.unique_key()) == Some(item))
    }
}

impl<T: UniqueElement + Eq> Eq for UniqueCollection<T> {}

impl<T: UniqueElement + Hash> Hash for UniqueCollection<T> {
    // Keys are unique, so sorting by key gives every equal collection the same order.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted: Vec<&T> = self.items.iter().collect();
        sorted.sort_by(|a, b| a.unique_key().cmp(b.unique_key()));
        sorted.len().hash(state);
        for item in sorted {
            item.hash(state);
        }
    }
}

impl<'a, T> IntoIterator for &'a UniqueCollection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for UniqueCollection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}
