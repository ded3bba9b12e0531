//! Recognition Service Clients
//!
//! Boundary to the remote image classification service. A client receives the
//! raw image plus a method-specific [`RequestProfile`] and returns the best
//! suggestion, or a [`RecognitionError`] describing why there is none.
//!
//! Callers treat every error as "no result for this method"; nothing here is
//! fatal to an identification run.

use async_trait::async_trait;
use thiserror::Error;

pub mod plant_id_client;

pub use plant_id_client::{ClientSettings, PlantIdClient};

/// Recognition client errors
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No suggestions returned")]
    NoSuggestions,

    #[error("Client construction failed: {0}")]
    ClientBuild(String),
}

/// Request options varying per identification method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestProfile {
    /// Service modifiers (e.g. "crops_fast", "health_all")
    pub modifiers: &'static [&'static str],
    /// Detail fields requested for each suggestion
    pub plant_details: &'static [&'static str],
}

/// Best suggestion returned by the service
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Suggested species name
    pub name: String,
    /// Match probability (0.0-1.0)
    pub probability: f64,
    /// URL of the first similar reference image, if any
    pub reference_url: Option<String>,
}

/// Image classification service
#[async_trait]
pub trait RecognitionClient: Send + Sync {
    /// Client identifier for logging
    fn name(&self) -> &'static str;

    /// Classify one image using the given request profile
    async fn classify(
        &self,
        image: &[u8],
        profile: &RequestProfile,
    ) -> Result<Classification, RecognitionError>;
}
