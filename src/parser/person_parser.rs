//! Builds a [`Person`] from tokenized arguments.

use super::cli_syntax::{
    PERSON_PREFIXES, PREFIX_ADDRESS, PREFIX_CUSTOM_FIELD, PREFIX_EMAIL, PREFIX_GENDER,
    PREFIX_NAME, PREFIX_PHONE, PREFIX_SECONDARY_PHONE, PREFIX_TAG,
};
use super::prefix::Prefix;
use super::tokenizer::{ArgumentMultimap, ArgumentTokenizer};
use crate::domain::{
    Address, CustomField, Email, FieldValue, Gender, Name, Phone, SecondaryPhone, Tag,
    ValidationError,
};
use crate::error::{ParseError, ParseResult};
use crate::models::Person;

/// Prefixes that may appear at most once.
static SINGLE_VALUED: [&Prefix; 6] = [
    &PREFIX_NAME,
    &PREFIX_PHONE,
    &PREFIX_EMAIL,
    &PREFIX_ADDRESS,
    &PREFIX_GENDER,
    &PREFIX_SECONDARY_PHONE,
];

/// Parse a person description such as
/// `n/John Doe p/98765432 e/john@example.com a/123 Clementi Rd t/friend`.
///
/// # Errors
///
/// See [`person_from_arguments`].
pub fn parse_person(args: &str) -> ParseResult<Person> {
    let arguments = ArgumentTokenizer::tokenize(args, &PERSON_PREFIXES);
    person_from_arguments(&arguments)
}

/// Build a person from already tokenized arguments.
///
/// Name, phone, email and address are required. Gender and secondary phone
/// are optional and may be given once; tags (`t/`) and custom fields
/// (`c/name:value`) may repeat.
///
/// # Errors
///
/// - `ParseError::UnexpectedPreamble` if text precedes the first prefix
/// - `ParseError::DuplicatePrefix` if a single-valued prefix repeats
/// - `ParseError::MissingField` if a required prefix is absent
/// - `ParseError::Validation` if any value is malformed
/// - `ParseError::Duplicate` if a tag or custom field name repeats
pub fn person_from_arguments(arguments: &ArgumentMultimap) -> ParseResult<Person> {
    if !arguments.preamble().is_empty() {
        return Err(ParseError::UnexpectedPreamble(
            arguments.preamble().to_string(),
        ));
    }
    arguments.verify_no_duplicate_prefixes_for(&SINGLE_VALUED)?;

    let name = Name::parse(required(arguments, &PREFIX_NAME, Name::FIELD_NAME)?)?;
    let phone = Phone::parse(required(arguments, &PREFIX_PHONE, Phone::FIELD_NAME)?)?;
    let email = Email::parse(required(arguments, &PREFIX_EMAIL, Email::FIELD_NAME)?)?;
    let address = Address::parse(required(arguments, &PREFIX_ADDRESS, Address::FIELD_NAME)?)?;

    let gender = arguments
        .value(&PREFIX_GENDER)
        .map(Gender::parse)
        .transpose()?
        .unwrap_or_default();
    let secondary_phone = arguments
        .value(&PREFIX_SECONDARY_PHONE)
        .map(SecondaryPhone::parse)
        .transpose()?
        .unwrap_or_default();

    let tags = parse_tags(arguments.all_values(&PREFIX_TAG))?;
    let custom_fields = parse_custom_fields(arguments.all_values(&PREFIX_CUSTOM_FIELD))?;

    let person = Person::builder(name, phone, email, address)
        .gender(gender)
        .secondary_phone(secondary_phone)
        .tags(tags)
        .custom_fields(custom_fields)
        .build()?;

    tracing::debug!(person = %person.name(), "Parsed person from arguments");
    Ok(person)
}

/// Parse each raw tag name.
///
/// Duplicates are not checked here; that happens when the tags are placed in
/// a person.
pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Tag>, ValidationError> {
    raw.iter().map(|tag| Tag::parse(tag.as_ref())).collect()
}

/// Parse each raw `name:value` custom field.
pub fn parse_custom_fields<S: AsRef<str>>(raw: &[S]) -> Result<Vec<CustomField>, ValidationError> {
    raw.iter()
        .map(|field| CustomField::parse(field.as_ref()))
        .collect()
}

fn required<'a>(
    arguments: &'a ArgumentMultimap,
    prefix: &Prefix,
    field: &'static str,
) -> ParseResult<&'a str> {
    arguments.value(prefix).ok_or_else(|| ParseError::MissingField {
        field,
        prefix: prefix.to_string(),
    })
}
