//! End-to-end identification workflow tests
//!
//! Orchestrator + real plant.id client + static feature analyzer against a
//! local mock service.

mod helpers;

use helpers::{capture_logs, plant_id_body, MockReply, MockService};
use plantid_ai::analyzers::StaticFeatureAnalyzer;
use plantid_ai::clients::{ClientSettings, PlantIdClient};
use plantid_ai::config::IdentifyConfig;
use plantid_ai::{FeatureCategory, IdentificationEvent, IdentificationOrchestrator, MethodKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::Level;

fn orchestrator_for(service: &MockService, max_attempts: u32) -> IdentificationOrchestrator {
    let client = PlantIdClient::with_settings(
        "test-api-key".to_string(),
        ClientSettings {
            endpoint: service.endpoint.clone(),
            timeout: Duration::from_secs(5),
            requests_per_second: 1000,
        },
    )
    .unwrap();

    IdentificationOrchestrator::new(
        Arc::new(client),
        Arc::new(StaticFeatureAnalyzer::new()),
        IdentifyConfig {
            max_attempts,
            retry_delay: Duration::from_millis(1),
            ..IdentifyConfig::default()
        },
    )
}

#[tokio::test]
async fn test_confident_match_completes_in_one_attempt() {
    let service = MockService::start(MockReply::Json(plant_id_body("Bellis perennis", 0.97))).await;

    let result = orchestrator_for(&service, 5).identify(b"photo").await;

    assert_eq!(service.requests().len(), 5);
    assert_eq!(result.name, "Bellis perennis");
    // DetailedFeature: 97 + 100 × 0.1
    assert!((result.confidence - 107.0).abs() < 1e-9);
    assert_eq!(result.authentication_methods, MethodKind::ALL.to_vec());
    assert!(result
        .confidence_summary
        .as_deref()
        .unwrap()
        .ends_with("(after 1 attempts)"));

    let features = result.features.unwrap();
    assert_eq!(features.get(FeatureCategory::StemStructure), Some("Erect, branching"));
}

#[tokio::test]
async fn test_low_confidence_runs_full_budget() {
    let service = MockService::start(MockReply::Json(plant_id_body("Rosa canina", 0.4))).await;

    let result = orchestrator_for(&service, 3).identify(b"photo").await;

    assert_eq!(service.requests().len(), 15);
    assert_eq!(result.authentication_methods.len(), 15);
    assert!(result
        .confidence_summary
        .as_deref()
        .unwrap()
        .ends_with("(after 3 attempts)"));
}

#[tokio::test]
async fn test_service_outage_degrades_to_empty_result() {
    let service = MockService::start(MockReply::Status(500)).await;
    let (logs, _guard) = capture_logs();

    let result = orchestrator_for(&service, 2).identify(b"photo").await;

    assert!(result.name.is_empty());
    assert_eq!(result.confidence, 0.0);
    assert!(result.authentication_methods.is_empty());
    assert_eq!(result.confidence_summary.as_deref(), Some("0.0% (after 2 attempts)"));
    assert_eq!(
        logs.count_at(Level::WARN, "Identification method failed, skipping"),
        10
    );
}

#[tokio::test]
async fn test_legacy_document() {
    let service = MockService::start(MockReply::Json(plant_id_body("Bellis perennis", 0.97))).await;

    let doc = orchestrator_for(&service, 5)
        .identify_document(b"photo")
        .await
        .unwrap();

    assert_eq!(doc["Name"], "Bellis perennis");
    assert_eq!(doc["AuthenticationMethods"].as_array().unwrap().len(), 5);
    assert_eq!(doc["Features"]["growth_form"], "Herbaceous perennial");
    assert!(doc["FinalConfidence"]
        .as_str()
        .unwrap()
        .ends_with("(after 1 attempts)"));
}

#[tokio::test]
async fn test_progress_events() {
    let service = MockService::start(MockReply::Json(plant_id_body("Bellis perennis", 0.97))).await;
    let client = PlantIdClient::with_settings(
        "k".to_string(),
        ClientSettings {
            endpoint: service.endpoint.clone(),
            timeout: Duration::from_secs(5),
            requests_per_second: 1000,
        },
    )
    .unwrap();

    let (tx, mut rx) = mpsc::channel(64);
    let orchestrator = IdentificationOrchestrator::with_events(
        Arc::new(client),
        Arc::new(StaticFeatureAnalyzer::new()),
        IdentifyConfig::default(),
        tx,
    );

    orchestrator.identify(b"photo").await;
    drop(orchestrator);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    let completed_methods = events
        .iter()
        .filter(|e| matches!(e, IdentificationEvent::MethodCompleted { .. }))
        .count();
    assert_eq!(completed_methods, 5);
    assert!(!events
        .iter()
        .any(|e| matches!(e, IdentificationEvent::Retrying { .. })));
    assert!(matches!(
        events.last(),
        Some(IdentificationEvent::Completed { attempts: 1, .. })
    ));
}
