use super::*;
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    Record::from_value(value).expect("object")
}

#[test]
fn map_line_prefers_location_coordinates() {
    let map = MapSettings::default();
    let pin = Coordinates::checked(13.75, 100.5);

    assert_eq!(map_line(pin, &map), "Map: 13.75, 100.5 (zoom 16)");
    assert_eq!(
        map_line(None, &map),
        "Map unavailable; default centre 13.7563, 100.5018 (zoom 12)"
    );
}

#[test]
fn procedure_card_shows_pricing_and_loaded_provider_count() {
    let procedure = Procedure(record(json!({
        "_id": "proc-1",
        "Procedure ID": "MRI-01",
        "Raw Name (EN)": "MRI Scan",
        "Raw Name (TH)": "เอ็มอาร์ไอ",
        "Price Min": 4000,
        "Price Max": "9000",
        "Provider ID": "p1, p2,p1"
    })));

    assert_eq!(
        procedure_card(&procedure, Some(2)),
        vec![
            "MRI Scan / เอ็มอาร์ไอ",
            "  Code: MRI-01",
            "  THB: 4000 - 9000",
            "  2 Providers",
        ]
    );
    assert_eq!(procedure_card(&procedure, Some(1)).last().map(String::as_str), Some("  1 Provider"));
    assert_eq!(procedure_card(&procedure, None).len(), 3);
    assert_eq!(procedure_card(&procedure, Some(0)).len(), 3);
}

#[test]
fn unpriced_procedure_without_providers() {
    let procedure = Procedure(record(json!({"_id": "proc-2", "Provider ID": ""})));

    let card = procedure_card(&procedure, None);

    assert_eq!(card, vec!["Unknown Procedure", "  Price not listed"]);
}

#[test]
fn detail_card_hides_internal_keys() {
    let card = detail_card(
        "Bangkok Hospital",
        &record(json!({"_id": "x", "Clinic ID": "c1", "branchName": null})),
    );

    assert_eq!(
        card,
        vec![
            "== Bangkok Hospital ==",
            "  Clinic ID: c1",
            "  Branch Name: Not available",
        ]
    );
}

#[test]
fn listing_lines_include_ids_and_secondary_names() {
    let clinic = Clinic(record(json!({
        "Clinic ID": "c1",
        "Clinic Name (EN)": "Samitivej",
        "Clinic Name (TH)": "สมิติเวช"
    })));
    let provider = Provider(record(json!({"Full Name(THAI)": "หมอ"})));
    let procedure = Procedure(record(json!({"_id": "proc-1", "Raw Name (EN)": "MRI Scan"})));

    assert_eq!(clinic_line(&clinic), "Samitivej / สมิติเวช [c1]");
    assert_eq!(provider_line(&provider), "หมอ");
    assert_eq!(procedure_line(&procedure), "MRI Scan [proc-1]");
}

#[test]
fn failed_level_reports_its_error() {
    let mut state = CascadeState::default();
    state.selected_clinic_id = Some("c1".into());
    state.selected_location_id = Some("l1".into());
    state.status.procedures.error = Some("db down".to_string());

    let lines = category_lines(&state, FetchCategory::Procedures, &MapSettings::default());

    assert_eq!(
        lines,
        vec!["Error loading procedures: db down", "Procedures (0)"]
    );
}

#[test]
fn unselected_levels_render_nothing() {
    let state = CascadeState::default();
    let map = MapSettings::default();

    for category in FetchCategory::Clinics.descendants() {
        assert!(category_lines(&state, *category, &map).is_empty());
    }
    assert_eq!(render_state(&state, &map), "Clinics (0)");
}

#[test]
fn selected_location_renders_card_and_map() {
    let location = Location(record(json!({
        "Location ID": "l1",
        "Address": "123 Main St",
        "Latitude": "13.75",
        "Longitude": "100.50"
    })));
    let mut state = CascadeState::default();
    state.selected_clinic_id = Some("c1".into());
    state.locations = vec![location.clone()];
    state.selected_location_id = Some("l1".into());
    state.location_details = Some(location);

    let lines = category_lines(&state, FetchCategory::Locations, &MapSettings::default());

    assert_eq!(lines[0], "Locations (1)");
    assert_eq!(lines[1], "  123 Main St [l1]");
    assert_eq!(lines[2], "== 123 Main St ==");
    assert_eq!(lines.last().map(String::as_str), Some("Map: 13.75, 100.5 (zoom 16)"));
}

#[test]
fn provider_card_lists_specialties_and_graduation() {
    let provider = Provider(record(json!({
        "_id": "p1",
        "Full Name(ENG)": "Dr. Somchai",
        "Full Name(THAI)": "นพ. สมชาย",
        "Specialties": "Cardiology",
        "Graduation Year": 2004
    })));

    assert_eq!(
        provider_card(&provider),
        vec![
            "Dr. Somchai / นพ. สมชาย [p1]",
            "  Specialties: Cardiology",
            "  Graduated: 2004",
        ]
    );
}

#[test]
fn location_without_offerings_says_so() {
    let mut state = CascadeState::default();
    state.selected_clinic_id = Some("c1".into());
    state.selected_location_id = Some("l1".into());

    let lines = category_lines(&state, FetchCategory::Procedures, &MapSettings::default());

    assert_eq!(lines, vec![NO_PROCEDURES]);
}

#[test]
fn only_the_selected_procedure_shows_its_loaded_providers() {
    let selected = Procedure(record(json!({"_id": "proc-1", "Raw Name (EN)": "MRI Scan", "Provider ID": "p1,p2,p3"})));
    let other = Procedure(record(json!({"_id": "proc-2", "Raw Name (EN)": "X-Ray", "Provider ID": "p1"})));
    let mut state = CascadeState::default();
    state.selected_clinic_id = Some("c1".into());
    state.selected_location_id = Some("l1".into());
    state.procedures = vec![selected.clone(), other];
    state.selected_procedure = Some(selected);
    state.providers = vec![
        Provider(record(json!({"_id": "p1", "Full Name(ENG)": "Dr. A"}))),
        Provider(record(json!({"_id": "p2", "Full Name(ENG)": "Dr. B"}))),
    ];
    let map = MapSettings::default();

    let procedures = category_lines(&state, FetchCategory::Procedures, &map);
    let providers = category_lines(&state, FetchCategory::Providers, &map);

    assert_eq!(
        procedures,
        vec![
            "Procedures (2)",
            "MRI Scan",
            "  Price not listed",
            "  2 Providers",
            "X-Ray",
            "  Price not listed",
            "Selected procedure: MRI Scan",
        ]
    );
    assert_eq!(
        providers,
        vec!["Providers (2)", "  Dr. A [p1]", "  Dr. B [p2]"]
    );
}
