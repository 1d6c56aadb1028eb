//! Gender value object.

use super::errors::ValidationError;
use super::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A person's gender. Defaults to [`Gender::Unspecified`] when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::Unspecified => "Unspecified",
        }
    }

    pub fn is_specified(&self) -> bool {
        *self != Self::Unspecified
    }

    fn from_raw(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "m" | "male" => Some(Self::Male),
            "f" | "female" => Some(Self::Female),
            "o" | "other" => Some(Self::Other),
            "u" | "unspecified" => Some(Self::Unspecified),
            _ => None,
        }
    }
}

impl FieldValue for Gender {
    const FIELD_NAME: &'static str = "gender";

    fn is_valid(raw: &str) -> bool {
        Self::from_raw(raw).is_some()
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        Self::from_raw(raw).ok_or_else(|| ValidationError::InvalidGender(raw.to_string()))
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as FieldValue>::parse(s)
    }
}

impl TryFrom<String> for Gender {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        <Self as FieldValue>::parse(&value)
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
