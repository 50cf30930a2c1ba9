//! One-line summaries of every kind of value.

use bunch::{Bunch, Value, bunch::summarize};
use ndarray::{ArrayD, IxDyn};

fn five() -> Value {
    Value::List(vec![
        Value::Int(10),
        Value::Int(20),
        Value::Int(30),
        Value::Int(40),
        Value::Int(50),
    ])
}

#[test]
fn test_five_element_sequence_within_limit_is_inlined() {
    let value = five();
    let summary = summarize(&value, ",", 50);
    let (content, descriptor) = summary.split_once(" # ").unwrap();
    assert_eq!(content, "[10,20,30,40,50],");
    assert!(descriptor.starts_with("id=0x"));
    assert!(descriptor.ends_with(", length=5"));
}

#[test]
fn test_five_element_sequence_over_limit_is_elided() {
    let summary = summarize(&five(), ",", 2);
    let (content, descriptor) = summary.split_once(" # ").unwrap();
    assert_eq!(content, "list(...),");
    assert!(descriptor.ends_with("length=5"));
}

#[test]
fn test_tuples_have_no_identity() {
    let tuple = Value::Tuple(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(summarize(&tuple, ",", 50), "(1,2,3), # length=3");
    assert_eq!(summarize(&tuple, ",", 2), "tuple(...), # length=3");
}

#[test]
fn test_content_falls_back_to_type_wrapper() {
    // Fits the limit but is not shown bare
    assert_eq!(summarize(&Value::Bool(false), "", 50), "bool(False)");
    // Too wide to show bare and too wide for the wrapper
    let text = Value::from("abcdefghij");
    assert_eq!(summarize(&text, "", 11), "str(...) # length=10");
    assert_eq!(summarize(&text, "", 12), "'abcdefghij' # length=10");
}

#[test]
fn test_bytes_use_literal_form() {
    let bytes = Value::from(b"\x00ab".to_vec());
    assert_eq!(summarize(&bytes, ",", 50), "b'\\x00ab', # length=3");
}

#[test]
fn test_bunch_summary() {
    let bunch = Bunch::new().with("k", 1).unwrap();
    let summary = summarize(&Value::from(bunch), "", 8);
    assert!(summary.starts_with("Bunch(...) # id=0x"));
    assert!(summary.ends_with(", length=1"));
}

#[test]
fn test_array_summary() {
    let array = ArrayD::from_shape_vec(IxDyn(&[3]), vec![0.5, 1.5, 2.5]).unwrap();
    let summary = summarize(&Value::Array(array), ",", 50);
    let (content, descriptor) = summary.split_once(" # ").unwrap();
    assert_eq!(content, "ndarray([0.5,1.5,2.5]),");
    assert!(descriptor.ends_with(", shape=(3,), dtype=float64"));

    let large = ArrayD::<f64>::zeros(IxDyn(&[10, 10]));
    let summary = summarize(&Value::Array(large), ",", 50);
    assert!(summary.starts_with("ndarray(...), # id=0x"));
    assert!(summary.ends_with(", shape=(10,10), dtype=float64, order='C'"));
}

#[test]
fn test_opaque_values() {
    let value = Value::Opaque {
        type_name: "Device".to_string(),
        repr: "<Device amp0>".to_string(),
    };
    let summary = summarize(&value, ",", 50);
    assert!(summary.starts_with("Device(<Device,amp0>), # id=0x"));
    assert!(!summary.contains("length"));
}
