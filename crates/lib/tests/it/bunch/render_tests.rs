//! Rendering layout: ordering, grouping and column alignment.

use bunch::{
    Bunch, RenderOptions, SummaryMode, Value,
    constants::{DISPLAY_SORTED, FIELD_ORDER, SUMMARIZE},
};

use crate::helpers::{rendered_keys, session};

#[test]
fn test_session_layout() {
    let expected = [
        "{",
        "    'subject'     : ",
        "    {",
        "        'id'      : 'S01',",
        "        'age'     : 31,",
        "    },",
        "    'acquisition' : ",
        "    {",
        "        'rate'    : 256,",
        "        'montage' : ",
        "        {",
        "            'reference' : 'Cz',",
        "            'channels'  : ['C3', 'C4'],",
        "        },",
        "        'filter'  : ",
        "        {",
        "            'band' : (0.5, 40.0),",
        "        },",
        "    },",
        "    'notes'       : '',",
        "}",
    ]
    .join("\n");
    assert_eq!(session().to_string(), expected);
}

#[test]
fn test_field_order_then_unknown_keys() {
    let bunch = Bunch::new()
        .with("a", 1)
        .unwrap()
        .with("b", 2)
        .unwrap()
        .with("c", 3)
        .unwrap()
        .with_config(FIELD_ORDER, "b a")
        .unwrap();
    assert_eq!(rendered_keys(&bunch.to_string()), ["b", "a", "c"]);
}

#[test]
fn test_unknown_keys_sorting() {
    let mut bunch = Bunch::new();
    for key in ["zeta", "alpha", "mid"] {
        bunch.set(key, 0).unwrap();
    }
    bunch.configure(FIELD_ORDER, "mid").unwrap();

    assert_eq!(rendered_keys(&bunch.to_string()), ["mid", "zeta", "alpha"]);
    let sorted = bunch.render(&RenderOptions::default().with_sorted_keys(true));
    assert_eq!(rendered_keys(&sorted), ["mid", "alpha", "zeta"]);

    bunch.configure(DISPLAY_SORTED, true).unwrap();
    assert_eq!(rendered_keys(&bunch.to_string()), ["mid", "alpha", "zeta"]);
}

#[test]
fn test_sorting_option_reaches_nested_nodes() {
    let mut bunch = Bunch::new();
    bunch.set("outer.b", 1).unwrap();
    bunch.set("outer.a", 2).unwrap();
    let rendered = bunch.render(&RenderOptions::default().with_sorted_keys(true));
    assert_eq!(rendered_keys(&rendered), ["outer", "a", "b"]);
}

#[test]
fn test_nested_node_uses_own_field_order() {
    let mut bunch = session();
    bunch
        .get_mut("subject")
        .and_then(Value::as_bunch_mut)
        .unwrap()
        .configure(FIELD_ORDER, "age")
        .unwrap();
    bunch.configure(FIELD_ORDER, "notes //subject").unwrap();

    let rendered = bunch.to_string();
    assert_eq!(
        rendered_keys(&rendered)[..4],
        ["notes", "subject", "age", "id"]
    );
    // Group marker: a blank line right before 'subject'
    assert!(rendered.contains(",\n\n    'subject'"));
}

#[test]
fn test_group_marker_counts_toward_key_width() {
    let mut bunch = Bunch::new();
    bunch.set("k", 1).unwrap();
    bunch.configure(FIELD_ORDER, "//k").unwrap();
    assert_eq!(bunch.to_string(), "{\n\n    'k'   : 1,\n}");
}

#[test]
fn test_min_colon_position_is_respected() {
    let bunch = Bunch::new().with("a", 1).unwrap();
    let options = RenderOptions {
        min_colon_position: 20,
        ..RenderOptions::default()
    };
    let rendered = bunch.render(&options);
    let line = rendered.lines().nth(1).unwrap();
    assert_eq!(line.find(':'), Some(16));
}

#[test]
fn test_summaries_in_rendering() {
    let mut bunch = Bunch::new();
    bunch.set("seq", (1..=5).map(Value::Int).collect::<Vec<_>>()).unwrap();
    bunch.set("name", "x".repeat(80)).unwrap();

    let short = bunch.render(&RenderOptions::summarized(2));
    assert!(short.contains("'seq'  : list(...), # id=0x"));
    assert!(short.contains("'name' : str(...), # length=80"));

    let node_setting = bunch.clone().with_config(SUMMARIZE, 40).unwrap().to_string();
    assert!(node_setting.contains("'seq'  : [1,2,3,4,5], # id=0x"));

    let full = bunch
        .with_config(SUMMARIZE, 40)
        .unwrap()
        .render(&RenderOptions {
            summarize: Some(SummaryMode::Full),
            ..RenderOptions::default()
        });
    assert!(full.contains("'seq'  : [1, 2, 3, 4, 5],"));
}

#[test]
fn test_non_literal_values_render() {
    let mut bunch = Bunch::new();
    bunch
        .set(
            "callback",
            Value::Callable {
                module: "filters".to_string(),
                name: "notch".to_string(),
            },
        )
        .unwrap();
    assert_eq!(bunch.to_string(), "{\n    'callback' : <function filters.notch>,\n}");
}
