use serde_json::{json, Value};
use tower_client::framework::{ExclusionSet, Field, Record, Schema};
use tower_client::ClientError;

struct Inventoryish;

impl Schema for Inventoryish {
    const EXCLUDE: &'static [&'static str] = &["vars#ansible_host"];
}

#[test]
fn test_round_trip_preserves_document() {
    let documents = [
        json!({}),
        json!({"id": 1, "name": "web", "enabled": true, "description": null}),
        json!({"a": {"b": {"c": [1, {"d": [[1, 2], {"e": 1.5}]}]}}}),
        json!({"extraVars": "---\nx: 1", "survey_spec": {"spec": [{"variable": "v"}]}}),
    ];
    for doc in documents {
        let record = Record::parse(&doc.to_string()).unwrap();
        assert_eq!(record.to_value(), doc);

        let reparsed: Value = serde_json::from_str(&record.to_json()).unwrap();
        assert_eq!(reparsed, doc);

        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(serialized, doc);
    }
}

#[test]
fn test_round_trip_with_exclusions() {
    let doc = json!({"vars": {"ansibleHost": {"ip": "h1"}, "other": {"x": 1}}});
    let record = Record::parse_as::<Inventoryish>(&doc.to_string()).unwrap();
    assert_eq!(record.to_value(), doc);
}

#[test]
fn test_accessor_generation() {
    let mut record = Record::parse(r#"{"extraVars": "x"}"#).unwrap();
    assert_eq!(record.attr("extra_vars").unwrap().as_str(), Some("x"));

    record.set_attr("extra_vars", "y").unwrap();
    assert_eq!(record.get("extraVars").unwrap().as_str(), Some("y"));
}

#[test]
fn test_nested_wrapping() {
    let record = Record::parse(r#"{"address": {"zipCode": "01013"}}"#).unwrap();
    let address = record.attr("address").and_then(Field::as_record).unwrap();
    assert_eq!(address.attr("zip_code").unwrap().as_str(), Some("01013"));
}

#[test]
fn test_exclusion_propagation() {
    let record = Record::parse_as::<Inventoryish>(
        r#"{"vars": {"ansibleHost": "h1", "other": {"x": 1}}}"#,
    )
    .unwrap();

    let vars = record.attr("vars").and_then(Field::as_record).unwrap();
    assert_eq!(vars.attr("ansible_host").unwrap().as_value(), Some(&json!("h1")));

    let other = vars.attr("other").and_then(Field::as_record).unwrap();
    assert_eq!(other.attr("x").unwrap().as_u64(), Some(1));
}

#[test]
fn test_excluded_object_is_not_wrapped() {
    let record = Record::parse_as::<Inventoryish>(
        r#"{"vars": {"ansibleHost": {"ip": "10.0.0.1"}}}"#,
    )
    .unwrap();
    let vars = record.attr("vars").and_then(Field::as_record).unwrap();
    let host = vars.attr("ansible_host").unwrap();
    assert!(host.as_record().is_none());
    assert_eq!(host.lookup("ip"), Some(json!("10.0.0.1")));
}

#[test]
fn test_exclusion_only_applies_at_declared_level() {
    // A top-level `ansibleHost` is not covered by "vars#ansible_host".
    let record = Record::parse_as::<Inventoryish>(r#"{"ansibleHost": {"ip": "x"}}"#).unwrap();
    assert!(record.attr("ansible_host").unwrap().as_record().is_some());
}

#[test]
fn test_explicit_exclusion_set() {
    let set = std::sync::Arc::new(ExclusionSet::new(["meta"]));
    let record = Record::parse_with("Custom", r#"{"meta": {"a": 1}, "body": {"a": 1}}"#, set).unwrap();
    assert!(record.attr("meta").unwrap().as_record().is_none());
    assert!(record.attr("body").unwrap().as_record().is_some());
    assert_eq!(record.kind(), "Custom");
}

#[test]
fn test_excluded_array_of_objects_stays_raw() {
    let set = std::sync::Arc::new(ExclusionSet::new(["spec"]));
    let record = Record::parse_with("Survey", r#"{"spec": [{"a": 1}], "other": [{"a": 1}]}"#, set).unwrap();

    let spec = record.attr("spec").unwrap();
    assert!(spec.as_list().is_none());
    assert_eq!(spec.as_value(), Some(&json!([{"a": 1}])));

    let other = record.attr("other").and_then(Field::as_list).unwrap();
    assert!(other[0].as_record().is_some());
}

#[test]
fn test_wide_document_lookups() {
    let doc: serde_json::Map<String, Value> = (0..2000)
        .map(|i| (format!("field{i}Name"), json!(i)))
        .collect();
    let mut record = Record::from_map(&doc);

    assert_eq!(record.attr("field1999_name").unwrap().as_u64(), Some(1999));
    assert_eq!(record.key_for("field0_name"), Some("field0Name"));

    record.set("field1000Name", "changed");
    assert_eq!(record.attr("field1000_name").unwrap().as_str(), Some("changed"));
    assert_eq!(record.len(), 2000);
    assert_eq!(record.keys().last(), Some("field1999Name"));
}

#[test]
fn test_collision_renaming() {
    let record = Record::parse(r#"{"to_s": "from document", "name": "n"}"#).unwrap();

    assert_eq!(record.attr("_to_s").unwrap().as_str(), Some("from document"));
    assert_eq!(record.key_for("_to_s"), Some("to_s"));
    // The record's own rendering is untouched.
    assert_eq!(record.to_string(), r#"{"to_s":"from document","name":"n"}"#);
    assert_eq!(record.accessors().collect::<Vec<_>>(), vec!["_to_s", "name"]);
}

#[test]
fn test_collision_with_camel_case_key() {
    // `toJson` converts to `to_json`, which the record already uses.
    let record = Record::parse(r#"{"toJson": false}"#).unwrap();
    assert_eq!(record.attr("_to_json").unwrap().as_bool(), Some(false));
    assert_eq!(record.to_json(), r#"{"toJson":false}"#);
}

#[test]
fn test_indexed_write_triggers_accessor() {
    let mut record = Record::parse("{}").unwrap();
    assert!(record.attr("new_field").is_none());

    record.set("newField", 7);

    assert_eq!(record.attr("new_field"), record.get("newField"));
    assert_eq!(record.attr("new_field").unwrap().as_i64(), Some(7));
    assert_eq!(record.to_value(), json!({"newField": 7}));
}

#[test]
fn test_indexed_write_wraps_like_construction() {
    let mut record = Record::parse_as::<Inventoryish>("{}").unwrap();
    record.set("vars", json!({"ansibleHost": {"ip": "x"}, "other": {"y": 1}}));

    let vars = record.attr("vars").and_then(Field::as_record).unwrap();
    assert!(vars.attr("ansible_host").unwrap().as_record().is_none());
    assert!(vars.attr("other").unwrap().as_record().is_some());
}

#[test]
fn test_equality() {
    let json = r#"{"id": 1, "related": {"jobs": "/api/v1/jobs/"}, "tags": ["a", {"b": 2}]}"#;
    let a = Record::parse(json).unwrap();
    let b = Record::parse(json).unwrap();
    assert_eq!(a, b);

    let c = Record::parse(
        r#"{"id": 1, "related": {"jobs": "/api/v1/jobs/"}, "tags": ["a", {"b": 3}]}"#,
    )
    .unwrap();
    assert_ne!(a, c);

    let d = Record::parse(r#"{"id": 1}"#).unwrap();
    assert_ne!(a, d);
    assert_ne!(d, a);
}

#[test]
fn test_equality_distinguishes_ids_beyond_f64_precision() {
    let a = Record::parse(r#"{"id": 9007199254740993}"#).unwrap();
    let b = Record::parse(r#"{"id": 9007199254740992}"#).unwrap();
    assert_ne!(a, b);
    assert!(!a.eql(&b));
}

#[test]
fn test_equality_after_mutation() {
    let a = Record::parse(r#"{"name": "a"}"#).unwrap();
    let mut b = a.clone();
    assert!(a.eql(&b));

    b.set_attr("name", "b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_from_str_and_parse_error() {
    let record: Record = r#"{"a": 1}"#.parse().unwrap();
    assert_eq!(record.len(), 1);

    let err = "{\"a\":".parse::<Record>().unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid JSON"));
}
