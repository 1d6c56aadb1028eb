//! The prefixes understood by person commands.
//!
//! These are process-wide constants; [`prefix_for`] looks them up by field
//! name.

use super::prefix::Prefix;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static PREFIX_NAME: Prefix = Prefix::from_static("n/");
pub static PREFIX_PHONE: Prefix = Prefix::from_static("p/");
pub static PREFIX_EMAIL: Prefix = Prefix::from_static("e/");
pub static PREFIX_ADDRESS: Prefix = Prefix::from_static("a/");
pub static PREFIX_GENDER: Prefix = Prefix::from_static("g/");
pub static PREFIX_SECONDARY_PHONE: Prefix = Prefix::from_static("sp/");
pub static PREFIX_TAG: Prefix = Prefix::from_static("t/");
pub static PREFIX_CUSTOM_FIELD: Prefix = Prefix::from_static("c/");

/// Every person prefix, in the order fields are usually written.
pub static PERSON_PREFIXES: [&Prefix; 8] = [
    &PREFIX_NAME,
    &PREFIX_PHONE,
    &PREFIX_EMAIL,
    &PREFIX_ADDRESS,
    &PREFIX_GENDER,
    &PREFIX_SECONDARY_PHONE,
    &PREFIX_TAG,
    &PREFIX_CUSTOM_FIELD,
];

static REGISTRY: Lazy<HashMap<&'static str, &'static Prefix>> = Lazy::new(|| {
    HashMap::from([
        ("name", &PREFIX_NAME),
        ("phone", &PREFIX_PHONE),
        ("email", &PREFIX_EMAIL),
        ("address", &PREFIX_ADDRESS),
        ("gender", &PREFIX_GENDER),
        ("secondary_phone", &PREFIX_SECONDARY_PHONE),
        ("tag", &PREFIX_TAG),
        ("custom_field", &PREFIX_CUSTOM_FIELD),
    ])
});

/// Look up the prefix for a field name such as `"tag"`.
pub fn prefix_for(field: &str) -> Option<&'static Prefix> {
    REGISTRY.get(field).copied()
}
