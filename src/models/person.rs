//! Person aggregate: a contact in the address book.

use super::change::{ChangeListeners, PersonChange, PersonField, SubscriptionId};
use crate::collection::UniqueCollection;
use crate::domain::{Address, CustomField, Email, Gender, Name, Phone, SecondaryPhone, Tag};
use crate::error::DuplicateElementError;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Read access to a person's details.
///
/// Collection accessors return snapshots that the caller owns.
pub trait ReadOnlyPerson {
    fn name(&self) -> &Name;
    fn phone(&self) -> &Phone;
    fn email(&self) -> &Email;
    fn address(&self) -> &Address;
    fn gender(&self) -> Gender;
    fn secondary_phone(&self) -> &SecondaryPhone;
    fn tags(&self) -> HashSet<Tag>;
    fn custom_fields(&self) -> HashSet<CustomField>;

    /// Tags in insertion order.
    fn tag_list(&self) -> Vec<Tag>;

    /// Custom fields in insertion order.
    fn custom_field_list(&self) -> Vec<CustomField>;

    /// Full-state comparison with any other person view.
    fn is_same_state_as(&self, other: &dyn ReadOnlyPerson) -> bool {
        self.name() == other.name()
            && self.phone() == other.phone()
            && self.email() == other.email()
            && self.address() == other.address()
            && self.gender() == other.gender()
            && self.secondary_phone() == other.secondary_phone()
            && self.tags() == other.tags()
            && self.custom_fields() == other.custom_fields()
    }

    /// One-line human-readable summary.
    ///
    /// Gender, secondary phone and custom fields only appear when set.
    fn as_text(&self) -> String {
        let mut text = format!(
            "{} Phone: {} Email: {} Address: {}",
            self.name(),
            self.phone(),
            self.email(),
            self.address()
        );
        if self.gender().is_specified() {
            text.push_str(&format!(" Gender: {}", self.gender()));
        }
        if !self.secondary_phone().is_empty() {
            text.push_str(&format!(" Secondary Phone: {}", self.secondary_phone()));
        }
        text.push_str(" Tags: ");
        for tag in self.tag_list() {
            text.push_str(&format!("[{}]", tag));
        }
        let custom_fields = self.custom_field_list();
        if !custom_fields.is_empty() {
            let joined: Vec<String> = custom_fields.iter().map(ToString::to_string).collect();
            text.push_str(&format!(" Custom Fields: {}", joined.join("; ")));
        }
        text
    }
}

/// A contact in the address book.
///
/// Every attribute always holds a validated value. Tags and custom fields
/// are owned copies of what the caller supplied, and readers only ever get
/// snapshots of them.
///
/// Equality and hashing cover every attribute. Ordering for display is by
/// name, ignoring case (see [`Person::compare_by_name`]).
///
/// # Example
///
/// ```
/// use address_book::domain::{Address, Email, Name, Phone, Tag};
/// use address_book::models::Person;
///
/// let person = Person::builder(
///     Name::new("John Doe").unwrap(),
///     Phone::new("98765432").unwrap(),
///     Email::new("john@example.com").unwrap(),
///     Address::new("123 Clementi Rd").unwrap(),
/// )
/// .tag(Tag::new("friend").unwrap())
/// .build()
/// .unwrap();
///
/// assert_eq!(person.tags().len(), 1);
/// ```
#[derive(Debug, Serialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    gender: Gender,
    secondary_phone: SecondaryPhone,
    tags: UniqueCollection<Tag>,
    custom_fields: UniqueCollection<CustomField>,
    #[serde(skip)]
    listeners: ChangeListeners,
}

/// Builder for [`Person`]; the mandatory fields are taken up front.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    gender: Gender,
    secondary_phone: SecondaryPhone,
    tags: Vec<Tag>,
    custom_fields: Vec<CustomField>,
}

impl PersonBuilder {
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn secondary_phone(mut self, secondary_phone: SecondaryPhone) -> Self {
        self.secondary_phone = secondary_phone;
        self
    }

    /// Append one tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Append several tags.
    pub fn tags<I: IntoIterator<Item = Tag>>(mut self, tags: I) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Append one custom field.
    pub fn custom_field(mut self, field: CustomField) -> Self {
        self.custom_fields.push(field);
        self
    }

    /// Append several custom fields.
    pub fn custom_fields<I: IntoIterator<Item = CustomField>>(mut self, fields: I) -> Self {
        self.custom_fields.extend(fields);
        self
    }

    /// Build the person.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateElementError` if two tags share a name or two custom
    /// fields share a name.
    pub fn build(self) -> Result<Person, DuplicateElementError> {
        let tags = UniqueCollection::from_items(self.tags)?;
        let custom_fields = UniqueCollection::from_items(self.custom_fields)?;

        Ok(Person {
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            gender: self.gender,
            secondary_phone: self.secondary_phone,
            tags,
            custom_fields,
            listeners: ChangeListeners::new(),
        })
    }
}

impl Person {
    /// Start building a person from its mandatory fields.
    ///
    /// Gender defaults to [`Gender::Unspecified`], the secondary phone to
    /// empty, and tags and custom fields to empty collections.
    pub fn builder(name: Name, phone: Phone, email: Email, address: Address) -> PersonBuilder {
        PersonBuilder {
            name,
            phone,
            email,
            address,
            gender: Gender::default(),
            secondary_phone: SecondaryPhone::default(),
            tags: Vec::new(),
            custom_fields: Vec::new(),
        }
    }

    /// Create a person from the mandatory fields and a set of tags.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateElementError` if `tags` repeats a tag name.
    pub fn new<I>(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: I,
    ) -> Result<Self, DuplicateElementError>
    where
        I: IntoIterator<Item = Tag>,
    {
        Self::builder(name, phone, email, address).tags(tags).build()
    }

    /// Deep copy of `source`. The copy has no listeners.
    pub fn copy_of(source: &Person) -> Self {
        Self {
            name: source.name.clone(),
            phone: source.phone.clone(),
            email: source.email.clone(),
            address: source.address.clone(),
            gender: source.gender,
            secondary_phone: source.secondary_phone.clone(),
            tags: source.tags.clone(),
            custom_fields: source.custom_fields.clone(),
            listeners: ChangeListeners::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn secondary_phone(&self) -> &SecondaryPhone {
        &self.secondary_phone
    }

    /// Snapshot of the tags.
    pub fn tags(&self) -> HashSet<Tag> {
        self.tags.to_set()
    }

    /// Snapshot of the tags in insertion order.
    pub fn tag_list(&self) -> Vec<Tag> {
        self.tags.to_vec()
    }

    /// Snapshot of the custom fields.
    pub fn custom_fields(&self) -> HashSet<CustomField> {
        self.custom_fields.to_set()
    }

    /// Snapshot of the custom fields in insertion order.
    pub fn custom_field_list(&self) -> Vec<CustomField> {
        self.custom_fields.to_vec()
    }

    /// Look up a custom field by name.
    pub fn custom_field(&self, name: &str) -> Option<&CustomField> {
        self.custom_fields.get(name)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = name;
        self.changed(PersonField::Name, || PersonChange::Name(self.name.clone()));
    }

    pub fn set_phone(&mut self, phone: Phone) {
        self.phone = phone;
        self.changed(PersonField::Phone, || PersonChange::Phone(self.phone.clone()));
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.changed(PersonField::Email, || PersonChange::Email(self.email.clone()));
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
        self.changed(PersonField::Address, || {
            PersonChange::Address(self.address.clone())
        });
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
        self.changed(PersonField::Gender, || PersonChange::Gender(self.gender));
    }

    pub fn set_secondary_phone(&mut self, secondary_phone: SecondaryPhone) {
        self.secondary_phone = secondary_phone;
        self.changed(PersonField::SecondaryPhone, || {
            PersonChange::SecondaryPhone(self.secondary_phone.clone())
        });
    }

    /// Replace all tags.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateElementError` if `replacement` repeats a tag name;
    /// the current tags are kept and no listener is notified.
    pub fn set_tags<I>(&mut self, replacement: I) -> Result<(), DuplicateElementError>
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags = UniqueCollection::from_items(replacement)?;
        self.changed(PersonField::Tags, || PersonChange::Tags(self.tags.to_set()));
        Ok(())
    }

    /// Replace all custom fields.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateElementError` if `replacement` repeats a field name;
    /// the current custom fields are kept and no listener is notified.
    pub fn set_custom_fields<I>(&mut self, replacement: I) -> Result<(), DuplicateElementError>
    where
        I: IntoIterator<Item = CustomField>,
    {
        self.custom_fields = UniqueCollection::from_items(replacement)?;
        self.changed(PersonField::CustomFields, || {
            PersonChange::CustomFields(self.custom_fields.to_set())
        });
        Ok(())
    }

    /// Observe changes to one attribute.
    pub fn subscribe<F>(&mut self, field: PersonField, listener: F) -> SubscriptionId
    where
        F: Fn(&PersonChange) + Send + Sync + 'static,
    {
        self.listeners.subscribe(field, Arc::new(listener))
    }

    /// Observe changes to every attribute.
    pub fn subscribe_all<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&PersonChange) + Send + Sync + 'static,
    {
        self.listeners.subscribe_all(Arc::new(listener))
    }

    /// Stop observing. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Case-insensitive comparison of names, used for sorting.
    pub fn compare_by_name(&self, other: &Person) -> Ordering {
        self.name.cmp_ignore_case(&other.name)
    }

    fn changed<F>(&self, field: PersonField, change: F)
    where
        F: FnOnce() -> PersonChange,
    {
        tracing::debug!(field = %field, person = %self.name, "Person field updated");
        if self.listeners.is_watching(field) {
            self.listeners.notify(&change());
        }
    }
}

/// Sort people by name, ignoring case. Equal names keep their relative order.
pub fn sort_by_name<P: ReadOnlyPerson>(people: &mut [P]) {
    people.sort_by(|a, b| a.name().cmp_ignore_case(b.name()));
}

impl ReadOnlyPerson for Person {
    fn name(&self) -> &Name {
        Person::name(self)
    }

    fn phone(&self) -> &Phone {
        Person::phone(self)
    }

    fn email(&self) -> &Email {
        Person::email(self)
    }

    fn address(&self) -> &Address {
        Person::address(self)
    }

    fn gender(&self) -> Gender {
        Person::gender(self)
    }

    fn secondary_phone(&self) -> &SecondaryPhone {
        Person::secondary_phone(self)
    }

    fn tags(&self) -> HashSet<Tag> {
        Person::tags(self)
    }

    fn custom_fields(&self) -> HashSet<CustomField> {
        Person::custom_fields(self)
    }

    fn tag_list(&self) -> Vec<Tag> {
        Person::tag_list(self)
    }

    fn custom_field_list(&self) -> Vec<CustomField> {
        Person::custom_field_list(self)
    }
}

impl Clone for Person {
    fn clone(&self) -> Self {
        Self::copy_of(self)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.gender == other.gender
            && self.secondary_phone == other.secondary_phone
            && self.tags == other.tags
            && self.custom_fields == other.custom_fields
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.email.hash(state);
        self.address.hash(state);
        self.gender.hash(state);
        self.secondary_phone.hash(state);
        self.tags.hash(state);
        self.custom_fields.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}
