//! Phone and SecondaryPhone value objects.

use super::errors::ValidationError;
use super::field::FieldValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minimum number of digits a phone number must carry.
const MIN_DIGITS: usize = 3;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A number needs at least three digits and may use common formatting
/// characters.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("98765432").unwrap();
/// assert_eq!(phone.as_str(), "98765432");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least three digits
    /// - Can contain: digits, spaces, hyphens, parentheses, plus sign, periods
    /// - Must not start or end with whitespace
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FieldValue for Phone {
    const FIELD_NAME: &'static str = "phone";

    fn is_valid(phone: &str) -> bool {
        if phone.trim() != phone {
            return false;
        }

        if phone.chars().filter(|c| c.is_ascii_digit()).count() < MIN_DIGITS {
            return false;
        }

        // All characters must be valid phone number characters
        phone.chars().all(|c| {
            c.is_ascii_digit()
                || c == ' '
                || c == '-'
                || c == '('
                || c == ')'
                || c == '+'
                || c == '.'
        })
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.trim())
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as FieldValue>::parse(s)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An optional second phone number.
///
/// Defaults to empty. When present it follows the same rules as [`Phone`];
/// its canonical text form is the empty string when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SecondaryPhone(Option<Phone>);

impl SecondaryPhone {
    /// The absent secondary phone.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Create a SecondaryPhone; an empty string yields the empty value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSecondaryPhone` if non-empty input is
    /// not a valid phone number.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if phone.is_empty() {
            return Ok(Self::empty());
        }
        Phone::new(phone)
            .map(|p| Self(Some(p)))
            .map_err(|e| ValidationError::InvalidSecondaryPhone(e.input().to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.0.as_ref()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref().map(Phone::as_str).unwrap_or("")
    }
}

impl From<Phone> for SecondaryPhone {
    fn from(phone: Phone) -> Self {
        Self(Some(phone))
    }
}

impl FieldValue for SecondaryPhone {
    const FIELD_NAME: &'static str = "secondary phone";

    fn is_valid(raw: &str) -> bool {
        raw.is_empty() || Phone::is_valid(raw)
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.trim())
    }
}

impl FromStr for SecondaryPhone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as FieldValue>::parse(s)
    }
}

impl Serialize for SecondaryPhone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecondaryPhone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SecondaryPhone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SecondaryPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
