//! Saving to and loading from files.

use std::fs;

use bunch::{Bunch, Error, Value, constants::FIELD_ORDER};

use crate::helpers::{mixed_scalars, session};

fn round_trip(bunch: &Bunch) -> Bunch {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bunch.txt");
    bunch.write(&file).unwrap();
    Bunch::read(&file).unwrap()
}

#[test]
fn test_round_trip_empty() {
    let empty = Bunch::new();
    assert_eq!(round_trip(&empty), empty);
}

#[test]
fn test_round_trip_mixed_scalars() {
    let bunch = mixed_scalars();
    let loaded = round_trip(&bunch);
    assert_eq!(loaded, bunch);
    assert_eq!(*loaded.get("single").unwrap(), Value::Tuple(vec![Value::from("only")]));
    assert_eq!(*loaded.get("label").unwrap(), "it's \"quoted\"\n");
}

#[test]
fn test_round_trip_three_levels() {
    let bunch = session();
    let loaded = round_trip(&bunch);
    assert_eq!(loaded, bunch);
    assert_eq!(loaded.to_string(), bunch.to_string());
}

#[test]
fn test_round_trip_special_floats() {
    let bunch = Bunch::new()
        .with("big", f64::INFINITY)
        .unwrap()
        .with("small", f64::NEG_INFINITY)
        .unwrap()
        .with("tiny", 1e-300)
        .unwrap();
    assert_eq!(round_trip(&bunch), bunch);

    let nan = Bunch::new().with("nan", f64::NAN).unwrap();
    let loaded = round_trip(&nan);
    assert!(loaded.get_as::<f64>("nan").unwrap().is_nan());
}

#[test]
fn test_written_text_is_the_full_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bunch.txt");
    let bunch = session().with_config(FIELD_ORDER, "notes //subject").unwrap();
    bunch.write(&file).unwrap();

    let text = fs::read_to_string(&file).unwrap();
    assert_eq!(text, bunch.to_string());
    assert_eq!(text.parse::<Bunch>().unwrap(), bunch);
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bunch.txt");
    fs::write(&file, "x".repeat(4096)).unwrap();

    let bunch = Bunch::new().with("a", 1).unwrap();
    bunch.write(&file).unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), "{\n    'a' : 1,\n}");
}

#[test]
fn test_read_hand_written_literal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hand.txt");
    fs::write(
        &file,
        "# session parameters\n{'rate': 256, \"band\": (1, 30,), 'ref': {'ch': 'Cz'},}\n",
    )
    .unwrap();

    let bunch = Bunch::read(&file).unwrap();
    assert_eq!(*bunch.get("rate").unwrap(), 256);
    assert_eq!(*bunch.get("ref.ch").unwrap(), "Cz");
}

#[test]
fn test_read_rejects_code() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("evil.txt");
    fs::write(&file, "{'a': __import__('os').system('true')}").unwrap();

    let err = Bunch::read(&file).unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.module(), "literal");
    match err {
        Error::Parse(parse_err) => {
            let source = fs::read_to_string(&file).unwrap();
            assert_eq!(parse_err.line_col(&source), (1, 7));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn test_read_rejects_runaway_nesting() {
    let depth = 200_000;
    let text = format!("{{'a': {}{}}}", "[".repeat(depth), "]".repeat(depth));
    let err = Bunch::parse(&text).unwrap_err();
    assert!(err.is_parse_error());
}
