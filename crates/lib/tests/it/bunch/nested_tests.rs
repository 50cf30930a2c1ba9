//! Conversion between bunches and plain nested literals.

use bunch::{Bunch, BunchError, Value, literal::{self, Literal}};
use ndarray::{ArrayD, IxDyn};

#[test]
fn test_from_nested_then_to_nested_is_identity() {
    let sources = [
        "{}",
        "{'a': 1}",
        "{'a': {'b': {'c': {'d': None}}}}",
        "{'x': [1, {'y': 2}, ({'z': (3,)},)], 'w': b'\\x01', 'v': -0.5}",
        "{'dotted.key': 1, '_reserved': 2, '': 3}",
    ];
    for source in sources {
        let nested = literal::parse(source).unwrap();
        let bunch = Bunch::from_nested(nested.clone()).unwrap();
        assert_eq!(bunch.to_nested().unwrap(), nested, "source {source}");
    }
}

#[test]
fn test_every_dict_becomes_a_bunch() {
    let nested = literal::parse("{'a': {'b': 1}, 'l': [{'c': 2}], 't': ({'d': 3},)}").unwrap();
    let bunch = Bunch::from_nested(nested).unwrap();

    assert!(bunch.get("a").unwrap().is_bunch());
    assert_eq!(*bunch.get("a.b").unwrap(), 1);
    for key in ["l", "t"] {
        match &*bunch.get(key).unwrap() {
            Value::List(items) | Value::Tuple(items) => assert!(items[0].is_bunch()),
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn test_verbatim_keys_are_entries_only() {
    let nested = literal::parse("{'a.b': 1, '_hidden': 2}").unwrap();
    let bunch = Bunch::from_nested(nested).unwrap();

    assert_eq!(bunch.len(), 2);
    // Paths split on dots, so the dotted key is only reachable by iteration
    assert!(bunch.get("a.b").is_err());
    assert_eq!(*bunch.get("_hidden").unwrap(), 2);
    assert!(bunch.iter().any(|(key, value)| key == "a.b" && *value == 1));
}

#[test]
fn test_from_nested_rejects_non_mappings() {
    for (source, found) in [("[]", "list"), ("1", "int"), ("'x'", "str"), ("None", "NoneType")] {
        let err = Bunch::from_nested(literal::parse(source).unwrap()).unwrap_err();
        assert_eq!(
            err,
            BunchError::NotAMapping {
                found: found.to_string()
            }
        );
        assert!(err.is_conversion_error());
    }
}

#[test]
fn test_to_nested_rejects_non_literals() {
    let mut bunch = Bunch::new();
    bunch.set("ok", 1).unwrap();
    bunch.set("deep.array", ArrayD::<f64>::zeros(IxDyn(&[2]))).unwrap();
    let err = bunch.to_nested().unwrap_err();
    assert_eq!(
        err,
        BunchError::NotLiteral {
            type_name: "ndarray".to_string()
        }
    );

    bunch.remove("deep.array");
    assert_eq!(
        bunch.to_nested().unwrap(),
        Literal::Dict(vec![
            ("ok".to_string(), Literal::Int(1)),
            ("deep".to_string(), Literal::Dict(vec![])),
        ])
    );
}
