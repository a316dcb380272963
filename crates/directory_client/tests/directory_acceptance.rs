use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use directory_client::{ApplyOutcome, HttpDirectoryClient, SelectionCascade};
use serde_json::json;
use shared::{EntityId, FetchCategory};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct DirectoryLog {
    requests: Arc<Mutex<Vec<String>>>,
}

async fn log_request(log: &DirectoryLog, path: &str, params: &HashMap<String, String>) {
    let mut pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    pairs.sort();
    let entry = if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", pairs.join("&"))
    };
    log.requests.lock().await.push(entry);
}

async fn clinics(State(log): State<DirectoryLog>) -> Response {
    log_request(&log, "/clinics-hospitals", &HashMap::new()).await;
    Json(json!([{"Clinic ID": "c1", "Clinic Name (EN)": "Bangkok Hospital"}])).into_response()
}

async fn locations(
    State(log): State<DirectoryLog>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    log_request(&log, "/locations", &params).await;
    Json(json!([{
        "Location ID": "l1",
        "Address": "123 Main St",
        "Latitude": "13.75",
        "Longitude": "100.50"
    }]))
    .into_response()
}

async fn failing_procedures(
    State(log): State<DirectoryLog>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    log_request(&log, "/procedure-offerings", &params).await;
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"message": "db down"})),
    )
        .into_response()
}

async fn spawn_directory() -> (String, DirectoryLog) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let log = DirectoryLog::default();
    let app = Router::new()
        .route("/clinics-hospitals", get(clinics))
        .route("/locations", get(locations))
        .route("/procedure-offerings", get(failing_procedures))
        .with_state(log.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), log)
}

async fn cascade_for(server_url: &str) -> SelectionCascade {
    let client = HttpDirectoryClient::new(server_url, Duration::from_secs(5), 0).expect("client");
    SelectionCascade::new(Arc::new(client))
}

#[tokio::test]
async fn browsing_to_a_location_yields_its_map_pin() {
    let (server_url, log) = spawn_directory().await;
    let mut cascade = cascade_for(&server_url).await;

    assert_eq!(cascade.initialize().await, Some(ApplyOutcome::Applied));
    let clinic_names: Vec<String> = cascade
        .state()
        .clinics
        .iter()
        .map(|clinic| clinic.display_name())
        .collect();
    assert_eq!(clinic_names, vec!["Bangkok Hospital"]);

    assert_eq!(cascade.select_clinic("c1").await, Some(ApplyOutcome::Applied));
    assert_eq!(
        log.requests.lock().await.last().cloned(),
        Some("/locations?clinicId=c1".to_string())
    );
    assert_eq!(
        cascade
            .state()
            .locations
            .iter()
            .filter_map(|location| location.id())
            .collect::<Vec<_>>(),
        vec![EntityId::from("l1")]
    );
    assert!(cascade.map_coordinates().is_none());

    cascade.select_location("l1").await;

    assert_eq!(
        cascade
            .state()
            .location_details
            .as_ref()
            .map(|location| location.display_name()),
        Some("123 Main St".to_string())
    );
    assert_eq!(
        cascade.map_coordinates().map(|coords| coords.as_pair()),
        Some([13.75, 100.50])
    );
}

#[tokio::test]
async fn procedure_failure_surfaces_server_message() {
    let (server_url, log) = spawn_directory().await;
    let mut cascade = cascade_for(&server_url).await;
    cascade.initialize().await;
    cascade.select_clinic("c1").await;

    assert_eq!(
        cascade.select_location("l1").await,
        Some(ApplyOutcome::Failed)
    );

    assert_eq!(
        log.requests.lock().await.last().cloned(),
        Some("/procedure-offerings?clinicId=c1&locationId=l1".to_string())
    );
    let status = cascade.status(FetchCategory::Procedures);
    assert_eq!(status.error.as_deref(), Some("db down"));
    assert!(!status.loading);
    assert!(cascade.state().procedures.is_empty());

    // Sibling levels are untouched and the location can be re-selected.
    assert!(cascade.status(FetchCategory::Locations).error.is_none());
    assert_eq!(cascade.state().locations.len(), 1);
    assert!(cascade.map_coordinates().is_some());
}

#[tokio::test]
async fn unreachable_directory_only_fails_clinics() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let mut cascade = cascade_for(&format!("http://{addr}")).await;

    assert_eq!(cascade.initialize().await, Some(ApplyOutcome::Failed));

    let state = cascade.state();
    assert!(state.clinics.is_empty());
    assert!(state.status.clinics.error.is_some());
    assert!(!state.status.clinics.loading);
    for category in FetchCategory::Clinics.descendants() {
        assert!(state.status.get(*category).error.is_none());
    }
}
