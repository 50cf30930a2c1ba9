use bunch::{Bunch, Value};

/// A single-level bunch holding one value of every literal scalar type
pub fn mixed_scalars() -> Bunch {
    Bunch::new()
        .with("none", Value::Null)
        .unwrap()
        .with("flag", true)
        .unwrap()
        .with("count", -7)
        .unwrap()
        .with("ratio", 0.25)
        .unwrap()
        .with("label", "it's \"quoted\"\n")
        .unwrap()
        .with("raw", b"\x00\xffab".to_vec())
        .unwrap()
        .with("items", vec![Value::Int(1), Value::from("two"), Value::Float(3.5)])
        .unwrap()
        .with("pair", Value::Tuple(vec![Value::Int(1), Value::Int(2)]))
        .unwrap()
        .with("single", Value::Tuple(vec![Value::from("only")]))
        .unwrap()
        .with("empty", Value::Tuple(vec![]))
        .unwrap()
}

/// A three-level bunch in the shape of a recording session description
pub fn session() -> Bunch {
    let mut bunch = Bunch::new();
    bunch.set("subject.id", "S01").unwrap();
    bunch.set("subject.age", 31).unwrap();
    bunch.set("acquisition.rate", 256).unwrap();
    bunch.set("acquisition.montage.reference", "Cz").unwrap();
    bunch
        .set(
            "acquisition.montage.channels",
            vec![Value::from("C3"), Value::from("C4")],
        )
        .unwrap();
    bunch.set("acquisition.filter.band", Value::Tuple(vec![0.5.into(), 40.0.into()])).unwrap();
    bunch.set("notes", "").unwrap();
    bunch
}

/// Collects the quoted keys of every entry line in a rendering, in order
pub fn rendered_keys(rendered: &str) -> Vec<String> {
    rendered
        .lines()
        .filter_map(|line| {
            let line = line.trim_start();
            let rest = line.strip_prefix('\'')?;
            let end = rest.find('\'')?;
            Some(rest[..end].to_string())
        })
        .collect()
}
