//! Identification Orchestrator
//!
//! Runs rounds of identification methods until the combined confidence reaches
//! the configured threshold or the attempt budget is spent.
//!
//! # Error Handling
//! - Method failures are absorbed by the runner (method skipped for that attempt)
//! - Reaching the attempt budget is not an error, just a lower-confidence answer
//! - No successful method at all yields the empty default identification
//!
//! # Example
//! ```rust,ignore
//! let orchestrator = IdentificationOrchestrator::new(client, analyzer, IdentifyConfig::default());
//! let result = orchestrator.identify(&image_bytes).await;
//! println!("{} ({:?})", result.name, result.confidence_summary);
//! ```

use super::IdentificationEvent;
use crate::analyzers::FeatureAnalyzer;
use crate::clients::RecognitionClient;
use crate::config::IdentifyConfig;
use crate::error::Result;
use crate::fusion::{combine, merge};
use crate::methods::MethodRunner;
use crate::types::{IdentificationResult, MethodKind};
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// Decision taken after an attempt is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Below threshold with attempts left
    Retrying,
    /// Threshold reached or attempt budget exhausted
    Done,
}

/// Accumulated state for one `identify` call
#[derive(Debug, Clone, Default)]
pub struct AttemptState {
    /// Every successful method result, across all attempts, in method order
    pub results: Vec<IdentificationResult>,
    /// Tag of every successful method run, in the same order
    pub methods: Vec<MethodKind>,
    /// Combined confidence after the latest evaluation
    pub combined_confidence: f64,
    /// Completed attempts
    pub attempt: u32,
}

impl AttemptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one method result and its tags
    pub fn record(&mut self, result: IdentificationResult) {
        self.methods.extend(result.authentication_methods.iter().copied());
        self.results.push(result);
    }

    /// Recompute combined confidence and close the current attempt
    pub fn evaluate(&mut self) -> f64 {
        self.combined_confidence = combine(&self.results);
        self.attempt += 1;
        self.combined_confidence
    }

    /// Next phase after evaluation
    pub fn next_phase(&self, config: &IdentifyConfig) -> Phase {
        if self.combined_confidence < config.confidence_threshold
            && self.attempt < config.max_attempts
        {
            Phase::Retrying
        } else {
            Phase::Done
        }
    }

    /// e.g. "96.4% (after 2 attempts)"
    pub fn summary(&self) -> String {
        format!(
            "{:.1}% (after {} attempts)",
            self.combined_confidence, self.attempt
        )
    }

    /// Merge accumulated results into the final identification
    pub fn finish(self) -> IdentificationResult {
        let mut result = merge(&self.results);
        result.confidence_summary = Some(self.summary());
        result.authentication_methods = self.methods;
        result
    }
}

/// Multi-method identification orchestrator
pub struct IdentificationOrchestrator {
    runner: MethodRunner,
    config: IdentifyConfig,
    event_tx: Option<mpsc::Sender<IdentificationEvent>>,
}

impl IdentificationOrchestrator {
    pub fn new(
        client: Arc<dyn RecognitionClient>,
        analyzer: Arc<dyn FeatureAnalyzer>,
        config: IdentifyConfig,
    ) -> Self {
        Self {
            runner: MethodRunner::new(client, analyzer),
            config,
            event_tx: None,
        }
    }

    /// Create orchestrator with event channel for progress reporting
    ///
    /// The receiver must be drained; sends wait for channel capacity.
    pub fn with_events(
        client: Arc<dyn RecognitionClient>,
        analyzer: Arc<dyn FeatureAnalyzer>,
        config: IdentifyConfig,
        event_tx: mpsc::Sender<IdentificationEvent>,
    ) -> Self {
        Self {
            runner: MethodRunner::new(client, analyzer),
            config,
            event_tx: Some(event_tx),
        }
    }

    pub fn config(&self) -> &IdentifyConfig {
        &self.config
    }

    /// Identify the plant in an image using every method, retrying until the
    /// confidence threshold or the attempt budget is reached
    pub async fn identify(&self, image: &[u8]) -> IdentificationResult {
        let span = info_span!("identify", run_id = %Uuid::new_v4(), image_bytes = image.len());
        self.run(image).instrument(span).await
    }

    /// Identify and re-serialize the result as a generic JSON document
    ///
    /// Keys follow the legacy document shape (`Name`, `Confidence`,
    /// `Description`, `Features`, `AuthenticationMethods`, `FinalConfidence`).
    pub async fn identify_document(&self, image: &[u8]) -> Result<serde_json::Value> {
        let result = self.identify(image).await;
        to_legacy_document(&result)
    }

    async fn run(&self, image: &[u8]) -> IdentificationResult {
        let mut state = AttemptState::new();

        loop {
            self.run_attempt(&mut state, image).await;

            let combined = state.evaluate();
            info!(
                attempt = state.attempt,
                combined_confidence = combined,
                results = state.results.len(),
                "Identification attempt evaluated"
            );
            self.emit_event(IdentificationEvent::AttemptEvaluated {
                attempt: state.attempt,
                combined_confidence: combined,
                result_count: state.results.len(),
            })
            .await;

            match state.next_phase(&self.config) {
                Phase::Done => break,
                Phase::Retrying => {
                    debug!(
                        attempt = state.attempt,
                        delay_ms = self.config.retry_delay.as_millis() as u64,
                        "Below confidence threshold, retrying"
                    );
                    self.emit_event(IdentificationEvent::Retrying {
                        attempt: state.attempt,
                        delay_ms: self.config.retry_delay.as_millis() as u64,
                    })
                    .await;
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }

        let attempts = state.attempt;
        let combined = state.combined_confidence;
        let result = state.finish();

        info!(
            name = %result.name,
            combined_confidence = combined,
            attempts,
            "Identification completed"
        );
        self.emit_event(IdentificationEvent::Completed {
            name: result.name.clone(),
            combined_confidence: combined,
            attempts,
            timestamp: chrono::Utc::now().timestamp(),
        })
        .await;

        result
    }

    /// Run every method once; all complete before results are recorded
    async fn run_attempt(&self, state: &mut AttemptState, image: &[u8]) {
        let attempt = state.attempt + 1;

        debug!(
            attempt,
            current_confidence = state.combined_confidence,
            "Starting identification attempt"
        );
        self.emit_event(IdentificationEvent::AttemptStarted {
            attempt,
            max_attempts: self.config.max_attempts,
        })
        .await;

        let outcomes = join_all(
            MethodKind::ALL
                .iter()
                .map(|method| self.runner.run(*method, image)),
        )
        .await;

        for (method, outcome) in MethodKind::ALL.iter().zip(outcomes) {
            match outcome {
                Some(result) => {
                    self.emit_event(IdentificationEvent::MethodCompleted {
                        attempt,
                        method: *method,
                        name: result.name.clone(),
                        confidence: result.confidence,
                    })
                    .await;
                    state.record(result);
                }
                None => {
                    self.emit_event(IdentificationEvent::MethodSkipped {
                        attempt,
                        method: *method,
                    })
                    .await;
                }
            }
        }
    }

    async fn emit_event(&self, event: IdentificationEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event).await;
        }
    }
}

/// Legacy JSON document for an identification result
pub fn to_legacy_document(result: &IdentificationResult) -> Result<serde_json::Value> {
    let features = match &result.features {
        Some(features) => serde_json::to_value(features)?,
        None => serde_json::Value::Null,
    };

    let methods: Vec<&str> = result
        .authentication_methods
        .iter()
        .map(MethodKind::tag)
        .collect();

    Ok(json!({
        "Name": result.name,
        "Confidence": result.confidence,
        "Description": result.description.clone().unwrap_or_default(),
        "Features": features,
        "AuthenticationMethods": methods,
        "FinalConfidence": result.confidence_summary.clone().unwrap_or_default(),
    }))
}
