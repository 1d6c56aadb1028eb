//! Integration tests for UniqueCollection with tags and custom fields.

use address_book::domain::{CustomField, Tag};
use address_book::{DuplicateElementError, UniqueCollection};
use std::collections::HashSet;

fn tags(names: &[&str]) -> Vec<Tag> {
    names.iter().map(|n| Tag::new(*n).unwrap()).collect()
}

/// A duplicate-free input comes back unchanged as a set.
#[test]
fn test_from_items_round_trips_sets() {
    let inputs: [&[&str]; 4] = [&[], &["friend"], &["friend", "colleague"], &["a", "b", "c", "d"]];

    for names in inputs {
        let set: HashSet<Tag> = tags(names).into_iter().collect();
        let collection = UniqueCollection::from_items(set.clone()).unwrap();
        assert_eq!(collection.to_set(), set);
        assert_eq!(collection.len(), names.len());
    }
}

/// Any input containing a repeated key is rejected as a whole.
#[test]
fn test_from_items_rejects_duplicates() {
    let err = UniqueCollection::from_items(tags(&["friend", "friend"])).unwrap_err();
    assert_eq!(
        err,
        DuplicateElementError {
            kind: "tag",
            key: "friend".to_string()
        }
    );

    let fields = vec![
        CustomField::new("birthday", "12 Jan").unwrap(),
        CustomField::new("github", "jdoe").unwrap(),
        CustomField::new("birthday", "13 Jan").unwrap(),
    ];
    let err = UniqueCollection::from_items(fields).unwrap_err();
    assert_eq!(err.kind, "custom field");
    assert_eq!(err.key, "birthday");
}

/// Insertion order is kept for display.
#[test]
fn test_to_vec_keeps_insertion_order() {
    let mut collection = UniqueCollection::from_items(tags(&["zeta", "alpha"])).unwrap();
    collection.add(Tag::new("mid").unwrap()).unwrap();

    assert_eq!(collection.to_vec(), tags(&["zeta", "alpha", "mid"]));
}

/// Removing a non-member fails and changes nothing.
#[test]
fn test_remove_missing_member() {
    let mut collection = UniqueCollection::from_items(tags(&["friend"])).unwrap();
    let err = collection.remove(&Tag::new("enemy").unwrap()).unwrap_err();

    assert_eq!(err.to_string(), "tag not found: enemy");
    assert_eq!(collection.len(), 1);
}
