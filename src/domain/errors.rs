//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided secondary phone number is invalid.
    InvalidSecondaryPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is invalid.
    InvalidAddress(String),

    /// The provided gender is not recognised.
    InvalidGender(String),

    /// The provided tag name is invalid.
    InvalidTag(String),

    /// The provided custom field is invalid.
    InvalidCustomField(String),
}

impl ValidationError {
    /// The offending raw input.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidName(raw)
            | Self::InvalidPhone(raw)
            | Self::InvalidSecondaryPhone(raw)
            | Self::InvalidEmail(raw)
            | Self::InvalidAddress(raw)
            | Self::InvalidGender(raw)
            | Self::InvalidTag(raw)
            | Self::InvalidCustomField(raw) => raw,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name: {:?} (names contain only letters, digits and spaces, and cannot be blank)",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {:?} (phone numbers contain only digits, at least 3 long)",
                phone
            ),
            Self::InvalidSecondaryPhone(phone) => write!(
                f,
                "Invalid secondary phone number: {:?} (must be empty or at least 3 digits)",
                phone
            ),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {:?}", email),
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid address: {:?} (addresses can take any value but cannot be blank)",
                address
            ),
            Self::InvalidGender(gender) => write!(
                f,
                "Invalid gender: {:?} (expected male, female, other or unspecified)",
                gender
            ),
            Self::InvalidTag(tag) => {
                write!(f, "Invalid tag: {:?} (tag names must be alphanumeric)", tag)
            }
            Self::InvalidCustomField(field) => write!(
                f,
                "Invalid custom field: {:?} (expected name:value with an alphanumeric name)",
                field
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
