//! CustomField value object.
//!
//! A custom field is a user-defined `name:value` pair such as
//! `birthday:12 Jan`. Within one person, custom field names are unique.

use super::errors::ValidationError;
use super::field::FieldValue;
use crate::collection::UniqueElement;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static FIELD_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}]+$").expect("custom field name pattern is a valid regex")
});

/// Separator between name and value in the raw and canonical forms.
pub const SEPARATOR: char = ':';

/// A user-defined field attached to a person.
///
/// Serializes as its canonical `name:value` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomField {
    name: String,
    value: String,
}

impl CustomField {
    /// Create a custom field from a name and a (possibly empty) value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCustomField` if the name is not
    /// alphanumeric, or if the value has surrounding whitespace.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let value = value.into();
        if !FIELD_NAME_PATTERN.is_match(&name) || value.trim() != value {
            return Err(ValidationError::InvalidCustomField(format!(
                "{}{}{}",
                name, SEPARATOR, value
            )));
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// A custom field with no value.
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }
}

impl FieldValue for CustomField {
    const FIELD_NAME: &'static str = "custom field";

    fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        let (name, value) = raw
            .split_once(SEPARATOR)
            .ok_or_else(|| ValidationError::InvalidCustomField(raw.to_string()))?;
        Self::new(name.trim(), value.trim())
    }
}

impl UniqueElement for CustomField {
    const KIND: &'static str = "custom field";

    fn unique_key(&self) -> &str {
        &self.name
    }
}

impl FromStr for CustomField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as FieldValue>::parse(s)
    }
}

impl TryFrom<String> for CustomField {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        <Self as FieldValue>::parse(&value)
    }
}

impl From<CustomField> for String {
    fn from(field: CustomField) -> Self {
        field.to_string()
    }
}

impl fmt::Display for CustomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, SEPARATOR, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_field_parse() {
        let field: CustomField = "birthday: 12 Jan ".parse().unwrap();
        assert_eq!(field.name(), "birthday");
        assert_eq!(field.value(), "12 Jan");
        assert_eq!(field.to_string(), "birthday:12 Jan");
    }

    #[test]
    fn test_custom_field_value_may_contain_separator() {
        let field: CustomField = "meeting:10:30am".parse().unwrap();
        assert_eq!(field.name(), "meeting");
        assert_eq!(field.value(), "10:30am");
        assert_eq!(field.to_string().parse::<CustomField>().unwrap(), field);
    }

    #[test]
    fn test_custom_field_blank_value() {
        let field: CustomField = "nickname:".parse().unwrap();
        assert!(field.is_blank());
    }

    #[test]
    fn test_custom_field_invalid() {
        assert!("no separator".parse::<CustomField>().is_err());
        assert!(":value".parse::<CustomField>().is_err());
        assert!("two words:value".parse::<CustomField>().is_err());
        assert!(!CustomField::is_valid("bad name:x"));
        assert!(CustomField::is_valid("github:jdoe"));
    }

    #[test]
    fn test_custom_field_unique_key_ignores_value() {
        let a = CustomField::new("birthday", "12 Jan").unwrap();
        let b = CustomField::new("birthday", "1 Feb").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.unique_key(), b.unique_key());
    }

    #[test]
    fn test_custom_field_serde_validates() {
        let field = CustomField::new("github", "jdoe").unwrap();
        assert_eq!(serde_json::to_string(&field).unwrap(), "\"github:jdoe\"");
        let result: Result<CustomField, _> = serde_json::from_str("\"bad name:x\"");
        assert!(result.is_err());
    }
}
