//! Address value object.

use super::errors::ValidationError;
use super::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A postal address. Any text is accepted as long as it is not blank and
/// has no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the address is blank or
    /// has surrounding whitespace.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if !Self::is_valid(&address) {
            return Err(ValidationError::InvalidAddress(address));
        }
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FieldValue for Address {
    const FIELD_NAME: &'static str = "address";

    fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.trim() == raw
    }

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw.trim())
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as FieldValue>::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validation() {
        assert!(Address::new("").is_err());
        assert!(Address::new(" ").is_err());
        assert!(Address::new(" Blk 456").is_err());
        assert!(Address::new("123 Clementi Rd  ").is_err());
        assert!(Address::new("-").is_ok());
        assert!(Address::new("123 Clementi Rd, #01-01").is_ok());
    }

    #[test]
    fn test_address_serde_validates() {
        let address = Address::new("123 Clementi Rd").unwrap();
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            "\"123 Clementi Rd\""
        );
        let result: Result<Address, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
        let result: Result<Address, _> = serde_json::from_str("\"123 Clementi Rd \"");
        assert!(result.is_err());
    }

    #[test]
    fn test_address_parse_round_trip() {
        for raw in ["123 Clementi Rd", " Blk 30 Geylang Street 29, #06-40  ", "-"] {
            let address = Address::parse(raw).unwrap();
            assert_eq!(Address::parse(&address.to_string()).unwrap(), address);
        }
    }
}
