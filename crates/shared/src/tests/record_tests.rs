use super::*;
use serde_json::json;

fn record(value: Value) -> Record {
    Record::from_value(value).expect("object")
}

#[test]
fn first_present_follows_candidate_order() {
    let location = record(json!({"lat": "1.5", "latitude": "2.5"}));
    assert_eq!(
        location.first_present(&["Latitude", "latitude", "lat"]),
        Some(&json!("2.5"))
    );
}

#[test]
fn first_present_skips_null_and_blank_values() {
    let location = record(json!({"Latitude": null, "latitude": "  ", "lat": 13.75}));
    assert_eq!(
        location.first_present(&["Latitude", "latitude", "lat"]),
        Some(&json!(13.75))
    );
}

#[test]
fn first_text_ignores_nested_values() {
    let clinic = record(json!({"Clinic ID": {"nested": true}, "_id": "abc"}));
    assert_eq!(clinic.first_text(&["Clinic ID", "_id"]), Some("abc".to_string()));
}

#[test]
fn first_text_stringifies_numbers() {
    let clinic = record(json!({"Clinic ID": 42}));
    assert_eq!(clinic.first_text(&["Clinic ID"]), Some("42".to_string()));
}

#[test]
fn matches_any_checks_every_candidate() {
    let clinic = record(json!({"Clinic ID": "c1", "_id": "mongo-1"}));
    assert!(clinic.matches_any(&["Clinic ID", "_id"], "c1"));
    assert!(clinic.matches_any(&["Clinic ID", "_id"], "mongo-1"));
    assert!(!clinic.matches_any(&["Clinic ID", "_id"], "c2"));
}

#[test]
fn from_value_rejects_non_objects() {
    assert!(Record::from_value(json!(["not", "an", "object"])).is_none());
    assert!(Record::from_value(json!("text")).is_none());
}

#[test]
fn preserves_field_order_from_payload() {
    let parsed: Record =
        serde_json::from_str(r#"{"Zeta": 1, "Alpha": 2, "Mid": 3}"#).expect("parse");
    let keys: Vec<&str> = parsed.fields().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
}
