//! Identification Method Runner
//!
//! Runs one [`MethodKind`] against the recognition client and applies that
//! method's confidence adjustment:
//!
//! | Method          | Adjustment                             |
//! |-----------------|----------------------------------------|
//! | Basic           | none                                   |
//! | DetailedFeature | + feature confidence × 0.1 (record attached) |
//! | Morphological   | +5.0                                   |
//! | Ecological      | +3.0                                   |
//! | Seasonal        | +2.0                                   |
//!
//! Base confidence is `probability × 100`. Results are not clamped.
//! A client failure yields `None`: the method is skipped for this attempt.

use crate::analyzers::{feature_confidence, FeatureAnalyzer};
use crate::clients::{RecognitionClient, RequestProfile};
use crate::types::{IdentificationResult, MethodKind};
use std::sync::Arc;
use tracing::{debug, warn};

/// Share of the feature confidence added by the DetailedFeature method
const FEATURE_CONFIDENCE_SHARE: f64 = 0.1;

impl MethodKind {
    /// Request options sent to the recognition service for this method
    pub fn request_profile(&self) -> RequestProfile {
        match self {
            MethodKind::Basic => RequestProfile {
                modifiers: &["crops_fast"],
                plant_details: &["common_names", "url", "wiki_description"],
            },
            MethodKind::DetailedFeature => RequestProfile {
                modifiers: &["crops_fast", "health_all", "disease_similar_images"],
                plant_details: &["common_names", "url", "wiki_description", "taxonomy"],
            },
            MethodKind::Morphological => RequestProfile {
                modifiers: &["crops_fast", "health_all"],
                plant_details: &["common_names", "url", "wiki_description", "taxonomy", "genus"],
            },
            MethodKind::Ecological => RequestProfile {
                modifiers: &["crops_fast", "health_all", "disease_similar_images"],
                plant_details: &[
                    "common_names",
                    "url",
                    "wiki_description",
                    "taxonomy",
                    "genus",
                    "family",
                ],
            },
            MethodKind::Seasonal => RequestProfile {
                modifiers: &["crops_fast", "health_all"],
                plant_details: &[
                    "common_names",
                    "url",
                    "wiki_description",
                    "taxonomy",
                    "genus",
                    "family",
                ],
            },
        }
    }
}

/// Runs identification methods against shared collaborators
#[derive(Clone)]
pub struct MethodRunner {
    client: Arc<dyn RecognitionClient>,
    analyzer: Arc<dyn FeatureAnalyzer>,
}

impl MethodRunner {
    pub fn new(client: Arc<dyn RecognitionClient>, analyzer: Arc<dyn FeatureAnalyzer>) -> Self {
        Self { client, analyzer }
    }

    /// Run one method on the image
    ///
    /// # Returns
    /// * `Some(result)` tagged with exactly this method
    /// * `None` if the recognition client failed (logged, not propagated)
    pub async fn run(&self, method: MethodKind, image: &[u8]) -> Option<IdentificationResult> {
        let profile = method.request_profile();

        let classification = match self.client.classify(image, &profile).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!(
                    method = %method,
                    client = self.client.name(),
                    error = %e,
                    "Identification method failed, skipping"
                );
                return None;
            }
        };

        let mut result = IdentificationResult {
            name: classification.name,
            confidence: classification.probability * 100.0 + method.flat_boost(),
            description: classification.reference_url,
            features: None,
            authentication_methods: vec![method],
            confidence_summary: None,
        };

        if method == MethodKind::DetailedFeature {
            let features = self.analyzer.analyze(image).await;
            result.confidence += feature_confidence(&features) * FEATURE_CONFIDENCE_SHARE;
            result.features = Some(features);
        }

        debug!(
            method = %method,
            name = %result.name,
            confidence = result.confidence,
            "Identification method completed"
        );

        Some(result)
    }
}
