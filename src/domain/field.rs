//! The contract every validated field type fulfils.

use super::errors::ValidationError;
use std::fmt;

/// A field value that is validated once, at construction, and is valid for
/// the rest of its life.
///
/// `Display` yields the canonical text form: parsing it again produces an
/// equal value.
pub trait FieldValue: Sized + fmt::Display {
    /// Human-readable field name used in logs and error messages.
    const FIELD_NAME: &'static str;

    /// Check whether `raw` satisfies the field's format rule.
    fn is_valid(raw: &str) -> bool;

    /// Parse raw user input, trimming surrounding whitespace first.
    fn parse(raw: &str) -> Result<Self, ValidationError>;
}
