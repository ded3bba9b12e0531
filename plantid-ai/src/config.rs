//! Configuration resolution for plantid-ai
//!
//! Provides API key resolution with CLI → ENV → TOML priority and the
//! identification loop settings.

use plantid_common::config::TomlConfig;
use plantid_common::{Error, Result};
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable holding the recognition API key
pub const API_KEY_ENV: &str = "PLANTID_API_KEY";

/// Identification loop settings
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifyConfig {
    /// Combined confidence (0-100) at which identification stops
    pub confidence_threshold: f64,
    /// Maximum attempts; each attempt runs every method once
    pub max_attempts: u32,
    /// Pause between attempts
    pub retry_delay: Duration,
}

impl Default for IdentifyConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 95.0,
            max_attempts: 5,
            retry_delay: Duration::from_secs(1),
        }
    }
}

impl IdentifyConfig {
    /// Build from the `[identification]` TOML table
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let section = &config.identification;

        if section.max_attempts == 0 {
            return Err(Error::Config(
                "identification.max_attempts must be at least 1".to_string(),
            ));
        }
        if !section.confidence_threshold.is_finite() {
            return Err(Error::Config(
                "identification.confidence_threshold must be a finite number".to_string(),
            ));
        }

        Ok(Self {
            confidence_threshold: section.confidence_threshold,
            max_attempts: section.max_attempts,
            retry_delay: Duration::from_millis(section.retry_delay_ms),
        })
    }
}

/// Resolve the recognition API key
///
/// **Priority:** CLI argument → ENV (`PLANTID_API_KEY`) → TOML
pub fn resolve_api_key(cli_key: Option<&str>, toml_config: &TomlConfig) -> Result<String> {
    let env_key = std::env::var(API_KEY_ENV).ok();
    let toml_key = toml_config.api_key.as_deref();

    let candidates = [
        ("command line", cli_key),
        ("environment", env_key.as_deref()),
        ("TOML", toml_key),
    ];

    let sources: Vec<&str> = candidates
        .iter()
        .filter(|(_, key)| key.map(is_valid_key).unwrap_or(false))
        .map(|(source, _)| *source)
        .collect();

    // Warn if multiple sources (potential misconfiguration)
    if sources.len() > 1 {
        warn!(
            "API key found in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    for (source, key) in candidates {
        if let Some(key) = key.filter(|k| is_valid_key(k)) {
            info!("API key loaded from {}", source);
            return Ok(key.trim().to_string());
        }
    }

    Err(Error::Config(format!(
        "Recognition API key not configured. Please configure using one of:\n\
         1. Command line: --api-key your-key-here\n\
         2. Environment: {}=your-key-here\n\
         3. TOML config: ~/.config/plantid/config.toml (api_key = \"your-key\")",
        API_KEY_ENV
    )))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
