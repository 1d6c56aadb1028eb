//! Tag value object.

use super::errors::ValidationError;
use super::field::FieldValue;
use crate::collection::UniqueElement;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("tag pattern is a valid regex"));

/// A label attached to a person, e.g. `friend`.
///
/// Two tags are equal when their names are equal; comparison is
/// case-sensitive, so `friend` and `Friend` are distinct tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Create a new Tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` if the name is empty or not
    /// alphanumeric.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidTag(name));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FieldValue for Tag {
    const FIELD_NAME: &'static str = "tag";

    fn is_valid(raw: &str) -> bool {
        TAG_PATTERN.is_match(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.trim())
    }
}

impl UniqueElement for Tag {
    const KIND: &'static str = "tag";

    fn unique_key(&self) -> &str {
        &self.name
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as FieldValue>::parse(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
