//! Feature Analyzers
//!
//! Each analyzer exposes one asynchronous operation per botanical feature
//! category (`image -> label`) and assembles them into a [`FeatureRecord`].
//! Analysis is infallible: an analyzer that cannot determine a feature returns
//! an empty label, which leaves the category unanalyzed.

use crate::types::{FeatureCategory, FeatureRecord};
use async_trait::async_trait;
use futures::future::join_all;
use tracing::debug;

pub mod static_analyzer;

pub use static_analyzer::StaticFeatureAnalyzer;

/// Per-category image analyzer
#[async_trait]
pub trait FeatureAnalyzer: Send + Sync {
    /// Analyzer identifier for logging
    fn name(&self) -> &'static str;

    /// Produce a descriptive label for one feature category
    async fn analyze_category(&self, category: FeatureCategory, image: &[u8]) -> String;

    /// Analyze every category of the image
    ///
    /// Categories have no inter-dependency, so all of them run concurrently.
    async fn analyze(&self, image: &[u8]) -> FeatureRecord {
        let labels = join_all(
            FeatureCategory::ALL
                .iter()
                .map(|category| self.analyze_category(*category, image)),
        )
        .await;

        let mut record = FeatureRecord::new();
        for (category, label) in FeatureCategory::ALL.iter().zip(labels) {
            record.set(*category, label);
        }

        debug!(
            analyzer = self.name(),
            analyzed = record.analyzed_count(),
            total = FeatureCategory::COUNT,
            "Feature analysis complete"
        );

        record
    }
}

/// Share of analyzed categories, scaled to 0-100
pub fn feature_confidence(record: &FeatureRecord) -> f64 {
    record.analyzed_count() as f64 / FeatureCategory::COUNT as f64 * 100.0
}
