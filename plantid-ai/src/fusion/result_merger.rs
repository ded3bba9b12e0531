// Result Merger - Best Candidate Selection
//
// The highest-confidence result becomes the base (ties keep the earliest).
// Features are merged into a fresh record for MERGED_CATEGORIES only: the
// first non-empty label in result order wins. Other categories are dropped.

use crate::types::{FeatureCategory, FeatureRecord, IdentificationResult};
use tracing::debug;

/// Categories carried into the merged feature record
pub const MERGED_CATEGORIES: [FeatureCategory; 3] = [
    FeatureCategory::GrowthForm,
    FeatureCategory::RootSystem,
    FeatureCategory::StemStructure,
];

/// Merge per-method results into one final result
///
/// # Arguments
/// * `results` - Results in accumulation order
///
/// # Returns
/// * Best result with a merged feature record attached; the default (empty)
///   result with an empty record when `results` is empty
pub fn merge(results: &[IdentificationResult]) -> IdentificationResult {
    let best = results.iter().reduce(|best, candidate| {
        if candidate.confidence > best.confidence {
            candidate
        } else {
            best
        }
    });

    let mut merged = match best {
        Some(best) => best.clone(),
        None => {
            debug!("No results to merge, returning empty identification");
            IdentificationResult::default()
        }
    };

    merged.features = Some(merge_features(results));

    debug!(
        name = %merged.name,
        confidence = merged.confidence,
        candidates = results.len(),
        "Results merged"
    );

    merged
}

fn merge_features(results: &[IdentificationResult]) -> FeatureRecord {
    let mut combined = FeatureRecord::new();

    for category in MERGED_CATEGORIES {
        let label = results
            .iter()
            .filter_map(|r| r.features.as_ref()?.get(category))
            .next();

        if let Some(label) = label {
            combined.set(category, label);
        }
    }

    combined
}
