use super::*;
use serde_json::json;

#[test]
fn labels_are_humanized() {
    assert_eq!(format_label("clinic_id"), "Clinic Id");
    assert_eq!(format_label("branchName"), "Branch Name");
    assert_eq!(format_label("Clinic ID"), "Clinic ID");
    assert_eq!(format_label("Full Name(ENG)"), "Full Name(ENG)");
    assert_eq!(format_label("Price  Min"), "Price Min");
}

#[test]
fn blank_values_are_not_available() {
    assert_eq!(format_value(&Value::Null), NOT_AVAILABLE);
    assert_eq!(format_value(&json!("")), NOT_AVAILABLE);
    assert_eq!(format_value(&json!("Bangkok")), "Bangkok");
    assert_eq!(format_value(&json!(12.5)), "12.5");
    assert_eq!(format_value(&json!(false)), "false");
}

#[test]
fn nested_values_render_as_json() {
    let rendered = format_value(&json!({"open": "08:00"}));
    assert!(rendered.contains("\"open\": \"08:00\""), "{rendered}");
}

#[test]
fn internal_fields_are_hidden() {
    let record = Record::from_value(json!({
        "_id": "mongo-1",
        "Clinic ID": "c1",
        "_clinicId": "c1",
        "phone_number": ""
    }))
    .expect("object");

    let rows = detail_rows(&record);
    assert_eq!(
        rows,
        vec![
            DetailRow {
                label: "Clinic ID".to_string(),
                value: "c1".to_string(),
            },
            DetailRow {
                label: "Phone Number".to_string(),
                value: NOT_AVAILABLE.to_string(),
            },
        ]
    );
}
