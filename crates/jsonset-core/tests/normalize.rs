use jsonset_core::{normalize, normalize_to_text, rows_of, Row, ValueKind};
use serde_json::json;

fn rows(raw: &str) -> Vec<Row> {
    serde_json::from_str(raw).expect("rows deserialize")
}

#[test]
fn empty_rows() {
    assert_eq!(normalize(&[]), json!({}));
    assert_eq!(normalize_to_text(&[]), "{}");
}

#[test]
fn single_scalar_root_is_unwrapped() {
    let input = rows(r#"[{"value":"hello","type":"string"}]"#);
    assert_eq!(normalize(&input), json!("hello"));
}

#[test]
fn mixed_rows_skip_containers() {
    let input = rows(
        r#"[
            {"key":"a","value":1,"type":"number"},
            {"key":"b","value":[],"type":"array"},
            {"key":"c","value":2,"type":"number"}
        ]"#,
    );
    assert_eq!(normalize(&input), json!({"a": 1, "c": 2}));
}

#[test]
fn unknown_row_type_is_rejected_at_decode() {
    let err = serde_json::from_str::<Vec<Row>>(r#"[{"key":"a","value":1,"type":"date"}]"#)
        .unwrap_err();
    assert!(err.to_string().contains("unknown variant"));
}

#[test]
fn rows_serialize_with_type_tag() {
    let encoded = serde_json::to_value(rows_of(&json!({"n": 1, "l": []}))).unwrap();
    assert_eq!(
        encoded,
        json!([
            {"key": "n", "value": 1, "type": "number"},
            {"key": "l", "value": null, "type": "array"}
        ])
    );
}

#[test]
fn array_node_of_one_scalar_shows_the_scalar() {
    let shown = rows_of(&json!([42]));
    assert_eq!(shown[0].kind, ValueKind::Number);
    assert_eq!(normalize_to_text(&shown), "42");
}
