//! Error types for plantid-ai
//!
//! Identification itself never fails; these errors come from the edges
//! (configuration, client construction, JSON re-serialization).

use crate::clients::RecognitionError;
use thiserror::Error;

/// plantid-ai error type
#[derive(Debug, Error)]
pub enum Error {
    /// plantid-common error (configuration, IO)
    #[error("Common error: {0}")]
    Common(#[from] plantid_common::Error),

    /// Recognition client error
    #[error("Recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for plantid-ai operations
pub type Result<T> = std::result::Result<T, Error>;
