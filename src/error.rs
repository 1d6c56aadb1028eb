//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// An element equal to an existing member was added to a unique collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Duplicate {kind}: {key}")]
pub struct DuplicateElementError {
    /// Element kind, e.g. "tag"
    pub kind: &'static str,

    /// The uniqueness key that collided
    pub key: String,
}

/// An element that is not a member was removed from a unique collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} not found: {key}")]
pub struct NotFoundError {
    /// Element kind, e.g. "custom field"
    pub kind: &'static str,

    /// The uniqueness key that was looked up
    pub key: String,
}

/// Errors that can occur while turning tokenized arguments into a person.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Repeated tag or custom field
    #[error(transparent)]
    Duplicate(#[from] DuplicateElementError),

    /// A mandatory prefix was not supplied
    #[error("Missing required field: {field} ({prefix})")]
    MissingField {
        field: &'static str,
        prefix: String,
    },

    /// Text appeared before the first prefix
    #[error("Unexpected text before the first field: {0:?}")]
    UnexpectedPreamble(String),

    /// A single-valued prefix was given more than once
    #[error("Multiple values given for single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefix(Vec<String>),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
