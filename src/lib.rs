//! Address book core - the contact aggregate and its supporting types.
//!
//! This library provides the validated field types, the `Person` aggregate with
//! per-attribute change notification, and the prefix tokenizer used to turn
//! free-form command text into person fields.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email, address, gender, tags, custom fields)
//! - **collection**: Duplicate-rejecting collections for tags and custom fields
//! - **models**: The `Person` aggregate, its builder and change notifications
//! - **parser**: Prefixes, the argument tokenizer, and person parsing
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;

// Re-export commonly used types
pub use collection::{UniqueCollection, UniqueElement};
pub use config::Config;
pub use error::{ConfigError, DuplicateElementError, NotFoundError, ParseError};
pub use models::{Person, PersonBuilder, PersonChange, PersonField, ReadOnlyPerson};
pub use parser::{ArgumentMultimap, ArgumentTokenizer, Prefix};
