//! Identification workflow
//!
//! Drives the attempt/retry loop for a single image:
//! - **Attempting**: run all five methods concurrently, join, accumulate
//! - **Evaluating**: recompute combined confidence over every accumulated result
//! - **Retrying**: pause, then attempt again with the same image
//! - **Done**: merge accumulated results into the final identification
//!
//! # Architecture
//!
//! The orchestrator owns a [`MethodRunner`](crate::methods::MethodRunner) and a
//! fresh [`AttemptState`] per `identify` call. Progress is optionally reported
//! through an mpsc channel of [`IdentificationEvent`]s.

pub mod orchestrator;

use crate::types::MethodKind;

pub use orchestrator::{AttemptState, IdentificationOrchestrator, Phase};

/// Identification progress events
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum IdentificationEvent {
    /// Attempt started
    AttemptStarted {
        /// Attempt number (1-based)
        attempt: u32,
        /// Attempt budget
        max_attempts: u32,
    },

    /// A method produced a result
    MethodCompleted {
        /// Attempt number (1-based)
        attempt: u32,
        /// Method that ran
        method: MethodKind,
        /// Suggested species name
        name: String,
        /// Adjusted method confidence (0-100+)
        confidence: f64,
    },

    /// A method failed and was skipped for this attempt
    MethodSkipped {
        /// Attempt number (1-based)
        attempt: u32,
        /// Method that failed
        method: MethodKind,
    },

    /// Combined confidence recomputed after an attempt
    AttemptEvaluated {
        /// Attempt number (1-based)
        attempt: u32,
        /// Combined confidence over all results so far
        combined_confidence: f64,
        /// Number of accumulated results
        result_count: usize,
    },

    /// Threshold not reached, waiting before the next attempt
    Retrying {
        /// Attempt just finished (1-based)
        attempt: u32,
        /// Pause before the next attempt
        delay_ms: u64,
    },

    /// Identification finished
    Completed {
        /// Final species name (empty when nothing was identified)
        name: String,
        /// Final combined confidence
        combined_confidence: f64,
        /// Attempts used
        attempts: u32,
        /// Unix timestamp (seconds since epoch)
        timestamp: i64,
    },
}
