use super::*;
use serde_json::json;

#[test]
fn record_insert_replaces_in_place() {
    let mut record = Record::new().with("a", 1).with("b", 2);
    let prev = record.insert("a", 10);

    assert_eq!(prev, Some(Value::Int(1)));
    assert_eq!(record.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(record.get("a"), Some(&Value::Int(10)));
}

#[test]
fn option_converts_to_null_or_inner() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some("ann")), Value::text("ann"));
}

#[test]
fn record_serializes_as_map_in_field_order() {
    let record = Record::new()
        .with("zeta", 1)
        .with("alpha", Value::Null)
        .with("tags", Value::list(["a", "b"]));

    let out = serde_json::to_string(&Value::Record(record)).unwrap();

    assert_eq!(out, r#"{"zeta":1,"alpha":null,"tags":["a","b"]}"#);
}

#[test]
fn json_object_deserializes_into_ordered_record() {
    let value: Value = serde_json::from_value(json!({
        "nik_name": "@ann",
        "status": 1,
        "fst_name": null,
        "nested": [true, {"k": "v"}],
    }))
    .unwrap();

    let record = value.as_record().expect("object should become a record");
    assert_eq!(record.get("nik_name"), Some(&Value::text("@ann")));
    assert_eq!(record.get("status"), Some(&Value::Int(1)));
    assert_eq!(record.get("fst_name"), Some(&Value::Null));
    assert_eq!(
        record.get("nested"),
        Some(&Value::List(vec![
            Value::Bool(true),
            Value::Record(Record::new().with("k", "v")),
        ]))
    );
}

#[test]
fn floats_and_huge_integers_are_rejected() {
    assert!(serde_json::from_str::<Value>("1.5").is_err());
    assert!(serde_json::from_str::<Value>("18446744073709551615").is_err());
}

#[test]
fn record_deserialize_requires_object() {
    assert!(serde_json::from_str::<Record>("[1, 2]").is_err());
    assert!(serde_json::from_str::<Record>(r#"{"a": 1}"#).is_ok());
}
