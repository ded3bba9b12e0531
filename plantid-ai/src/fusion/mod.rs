// Fusion Module - Combining per-method identifications
//
// Confidence aggregation (weighted average over every accumulated result) and
// result merging (best candidate + partial feature merge).

pub mod confidence_aggregator;
pub mod result_merger;

pub use confidence_aggregator::{combine, method_weight};
pub use result_merger::merge;
