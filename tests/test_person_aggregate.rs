//! Integration tests for the Person aggregate.
//!
//! These tests validate construction through the builder, whole-attribute
//! mutation, snapshot isolation, equality and ordering, and change
//! notification.

use address_book::domain::{Address, CustomField, Email, Gender, Name, Phone, SecondaryPhone, Tag};
use address_book::models::{sort_by_name, Person, PersonChange, PersonField, ReadOnlyPerson};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

fn tag(name: &str) -> Tag {
    Tag::new(name).unwrap()
}

fn tag_set(names: &[&str]) -> HashSet<Tag> {
    names.iter().map(|n| tag(n)).collect()
}

fn john_doe() -> Person {
    Person::new(
        Name::new("John Doe").unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("john@example.com").unwrap(),
        Address::new("123 Clementi Rd").unwrap(),
        tag_set(&["friend"]),
    )
    .unwrap()
}

fn named(name: &str) -> Person {
    let mut person = john_doe();
    person.set_name(Name::new(name).unwrap());
    person
}

fn hash_of(person: &Person) -> u64 {
    let mut hasher = DefaultHasher::new();
    person.hash(&mut hasher);
    hasher.finish()
}

/// Replacing the tags of a freshly built person.
#[test]
fn test_set_tags_scenario() {
    let mut person = john_doe();
    assert_eq!(person.tags(), tag_set(&["friend"]));

    person.set_tags(tag_set(&["friend", "colleague"])).unwrap();

    assert_eq!(person.tags(), tag_set(&["friend", "colleague"]));
}

/// Every optional-field combination is reachable through the builder.
#[test]
fn test_builder_covers_all_optional_combinations() {
    let base = || {
        Person::builder(
            Name::new("Jane Roe").unwrap(),
            Phone::new("87654321").unwrap(),
            Email::new("jane@example.com").unwrap(),
            Address::new("9 Kent Ridge").unwrap(),
        )
    };

    let with_gender = base().gender(Gender::Female).build().unwrap();
    assert_eq!(with_gender.gender(), Gender::Female);
    assert!(with_gender.secondary_phone().is_empty());

    let with_secondary = base()
        .secondary_phone(SecondaryPhone::new("61234567").unwrap())
        .build()
        .unwrap();
    assert_eq!(with_secondary.gender(), Gender::Unspecified);
    assert_eq!(with_secondary.secondary_phone().as_str(), "61234567");

    let everything = base()
        .gender(Gender::Other)
        .secondary_phone(SecondaryPhone::new("61234567").unwrap())
        .tags(vec![tag("mentor")])
        .custom_fields(vec![CustomField::new("github", "jroe").unwrap()])
        .build()
        .unwrap();
    assert_eq!(everything.tag_list(), vec![tag("mentor")]);
    assert_eq!(
        everything.custom_field("github").map(CustomField::value),
        Some("jroe")
    );
}

/// Copies are equal to their source and share no collection storage.
#[test]
fn test_copy_of_is_deep() {
    let original = Person::builder(
        Name::new("John Doe").unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("john@example.com").unwrap(),
        Address::new("123 Clementi Rd").unwrap(),
    )
    .tag(tag("friend"))
    .custom_field(CustomField::new("birthday", "12 Jan").unwrap())
    .build()
    .unwrap();

    let mut copy = Person::copy_of(&original);
    assert_eq!(copy, original);
    assert_eq!(hash_of(&copy), hash_of(&original));

    copy.set_tags(tag_set(&["stranger"])).unwrap();
    copy.set_custom_fields(Vec::new()).unwrap();

    assert_eq!(original.tags(), tag_set(&["friend"]));
    assert_eq!(original.custom_fields().len(), 1);
    assert_ne!(copy, original);
}

/// Snapshots handed out by accessors cannot reach internal state.
#[test]
fn test_accessor_snapshots_are_isolated() {
    let person = john_doe();
    let mut snapshot = person.tags();
    snapshot.insert(tag("intruder"));
    snapshot.clear();

    assert_eq!(person.tags(), tag_set(&["friend"]));
}

/// Equality covers custom fields, gender and secondary phone.
#[test]
fn test_equality_is_full_state() {
    let a = john_doe();

    let mut b = john_doe();
    b.set_custom_fields(vec![CustomField::new("birthday", "12 Jan").unwrap()])
        .unwrap();
    assert_ne!(a, b, "custom fields take part in equality");

    let mut c = john_doe();
    c.set_gender(Gender::Male);
    assert_ne!(a, c, "gender takes part in equality");

    let mut d = john_doe();
    d.set_secondary_phone(SecondaryPhone::new("61234567").unwrap());
    assert_ne!(a, d, "secondary phone takes part in equality");

    assert!(a.is_same_state_as(&john_doe()));
    assert!(!a.is_same_state_as(&b));
}

/// Tag insertion order does not affect equality or hashing.
#[test]
fn test_equality_ignores_tag_order() {
    let mut a = john_doe();
    a.set_tags(vec![tag("x"), tag("y")]).unwrap();
    let mut b = john_doe();
    b.set_tags(vec![tag("y"), tag("x")]).unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

/// Sorting is by name, case-insensitive, and stable for equal names.
#[test]
fn test_sort_by_name() {
    let mut first_bob = named("bob");
    first_bob.set_phone(Phone::new("111").unwrap());
    let mut people = vec![named("charlie"), first_bob, named("Alice"), named("BOB")];

    sort_by_name(&mut people);

    let names: Vec<&str> = people.iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, vec!["Alice", "bob", "BOB", "charlie"]);
    assert_eq!(people[1].phone().as_str(), "111");
}

/// Listeners receive the new value once, synchronously, for their field only.
#[test]
fn test_change_notification() {
    let mut person = john_doe();
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = received.clone();
    let id = person.subscribe(PersonField::Tags, move |change| {
        sink.lock().unwrap().push(change.clone());
    });

    person.set_email(Email::new("johnny@example.com").unwrap());
    person.set_tags(tag_set(&["family"])).unwrap();
    assert_eq!(
        *received.lock().unwrap(),
        vec![PersonChange::Tags(tag_set(&["family"]))]
    );

    assert!(person.unsubscribe(id));
    person.set_tags(tag_set(&["work"])).unwrap();
    assert_eq!(received.lock().unwrap().len(), 1);
}

/// A person-wide listener sees every field in mutation order.
#[test]
fn test_subscribe_all_sees_every_mutation() {
    let mut person = john_doe();
    let fields = Arc::new(Mutex::new(Vec::new()));

    let sink = fields.clone();
    person.subscribe_all(move |change| sink.lock().unwrap().push(change.field()));

    person.set_name(Name::new("Jon Doe").unwrap());
    person.set_phone(Phone::new("99998888").unwrap());
    person.set_email(Email::new("jon@example.com").unwrap());
    person.set_address(Address::new("1 Jurong West").unwrap());
    person.set_gender(Gender::Male);
    person.set_secondary_phone(SecondaryPhone::empty());
    person.set_tags(Vec::new()).unwrap();
    person.set_custom_fields(Vec::new()).unwrap();

    assert_eq!(*fields.lock().unwrap(), PersonField::ALL.to_vec());
}

/// Copies never carry the source's listeners.
#[test]
fn test_copy_has_no_listeners() {
    let mut person = john_doe();
    let count = Arc::new(Mutex::new(0usize));
    let sink = count.clone();
    person.subscribe_all(move |_| *sink.lock().unwrap() += 1);

    let mut copy = person.clone();
    copy.set_name(Name::new("Someone Else").unwrap());

    assert_eq!(*count.lock().unwrap(), 0);
}
