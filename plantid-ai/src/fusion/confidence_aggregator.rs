// Confidence Aggregator - Method-Weighted Average
//
// Combined = Σ(confidence × weight) / Σ(weight), 0.0 for no results.
// Weight comes from the first entry of METHOD_WEIGHTS whose method tags the
// result; untagged and Basic results weigh DEFAULT_WEIGHT.

use crate::types::{IdentificationResult, MethodKind};

/// Weight for results not matched by any priority entry
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Method weights in priority order (first match wins)
pub const METHOD_WEIGHTS: [(MethodKind, f64); 4] = [
    (MethodKind::DetailedFeature, 1.5),
    (MethodKind::Morphological, 1.3),
    (MethodKind::Ecological, 1.2),
    (MethodKind::Seasonal, 1.1),
];

/// Reliability weight of a single result
pub fn method_weight(result: &IdentificationResult) -> f64 {
    METHOD_WEIGHTS
        .iter()
        .find(|(method, _)| result.authentication_methods.contains(method))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Combine results into a single weighted confidence
///
/// # Arguments
/// * `results` - Every result accumulated so far (all attempts)
///
/// # Returns
/// * Weighted average confidence, or 0.0 when `results` is empty
pub fn combine(results: &[IdentificationResult]) -> f64 {
    let (weighted_sum, total_weight) = results.iter().fold((0.0, 0.0), |(sum, total), result| {
        let weight = method_weight(result);
        (sum + result.confidence * weight, total + weight)
    });

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}
