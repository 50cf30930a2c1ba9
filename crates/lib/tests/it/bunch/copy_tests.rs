//! Shallow and deep copies.

use bunch::{Bunch, Value, constants::FIELD_ORDER};

use crate::helpers::session;

fn nested_identity(bunch: &Bunch, path: &str) -> Option<usize> {
    bunch.get(path).unwrap().identity()
}

#[test]
fn test_deep_copy_is_equal_but_not_aliased() {
    let original = session();
    let mut copy = original.copy(true);

    assert_eq!(copy, original);
    for path in ["subject", "acquisition", "acquisition.montage"] {
        assert_ne!(nested_identity(&copy, path), nested_identity(&original, path));
    }

    copy.set("acquisition.montage.reference", "Pz").unwrap();
    assert_eq!(*original.get("acquisition.montage.reference").unwrap(), "Cz");
    assert_ne!(copy, original);
}

#[test]
fn test_deep_copy_keeps_configuration() {
    let mut original = session();
    original.configure(FIELD_ORDER, "notes").unwrap();
    original
        .get_mut("acquisition")
        .and_then(Value::as_bunch_mut)
        .unwrap()
        .configure(FIELD_ORDER, "filter")
        .unwrap();

    let copy = original.copy(true);
    assert_eq!(copy.to_string(), original.to_string());
}

#[test]
fn test_shallow_copy_shares_nested_nodes() {
    let original = session();
    let copy = original.copy(false);
    assert_eq!(copy, original);
    for path in ["subject", "acquisition", "acquisition.montage"] {
        assert_eq!(nested_identity(&copy, path), nested_identity(&original, path));
    }
}

#[test]
fn test_writes_to_a_shallow_copy_stay_local() {
    let original = session();
    let mut copy = original.copy(false);

    copy.set("subject.age", 32).unwrap();
    copy.set("added", true).unwrap();

    assert_eq!(*original.get("subject.age").unwrap(), 31);
    assert!(!original.contains_key("added"));
    // Untouched branches are still shared
    assert_eq!(
        nested_identity(&copy, "acquisition"),
        nested_identity(&original, "acquisition")
    );
    assert_ne!(
        nested_identity(&copy, "subject"),
        nested_identity(&original, "subject")
    );
}

#[test]
fn test_deep_copy_reaches_bunches_inside_lists() {
    let inner = Bunch::new().with("k", 1).unwrap();
    let original = Bunch::new()
        .with("items", vec![Value::from(inner)])
        .unwrap();
    let copy = original.copy(true);

    let identity_of_item = |bunch: &Bunch| match &*bunch.get("items").unwrap() {
        Value::List(items) => items[0].identity(),
        _ => None,
    };
    assert!(identity_of_item(&original).is_some());
    assert_ne!(identity_of_item(&copy), identity_of_item(&original));
}
