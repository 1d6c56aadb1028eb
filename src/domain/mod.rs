//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a person:
//! name, phone numbers, email, address, gender, tags and custom fields.
//! These value objects provide validation at construction time and prevent
//! invalid data from being represented in the system.

pub mod address;
pub mod custom_field;
pub mod email;
pub mod errors;
pub mod field;
pub mod gender;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use custom_field::CustomField;
pub use email::Email;
pub use errors::ValidationError;
pub use field::FieldValue;
pub use gender::Gender;
pub use name::Name;
pub use phone::{Phone, SecondaryPhone};
pub use tag::Tag;
