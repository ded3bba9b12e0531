//! plantid-ai library interface
//!
//! Identifies a plant species from a photo by querying a remote recognition
//! service through several differently-configured methods, fusing the
//! per-method confidences and retrying until a target confidence is reached.

pub mod analyzers;
pub mod clients;
pub mod config;
pub mod error;
pub mod fusion;
pub mod image;
pub mod methods;
pub mod types;
pub mod workflow;

pub use crate::error::{Error, Result};
pub use crate::types::{
    FeatureCategory, FeatureGroup, FeatureRecord, IdentificationResult, MethodKind,
};
pub use crate::workflow::{IdentificationEvent, IdentificationOrchestrator};
