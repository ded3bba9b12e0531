//! Configuration loading and config file discovery
//!
//! Bootstrap configuration comes from a single TOML file. Resolution order:
//! 1. Explicit path (command-line argument)
//! 2. `~/.config/plantid/config.toml` (user)
//! 3. `/etc/plantid/config.toml` (system, Linux only)
//! 4. Built-in defaults when no file exists
//!
//! A missing file is not an error unless its path was given explicitly.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default plant.id classification endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.plant.id/v2/identify";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TomlConfig {
    /// Recognition service API key (optional, ENV takes precedence)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Recognition service endpoint override
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Identification loop tuning (optional)
    #[serde(default)]
    pub identification: IdentificationSection,
}

impl TomlConfig {
    /// Endpoint to use, falling back to the public plant.id endpoint
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// `[identification]` table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentificationSection {
    /// Combined confidence (0-100) at which the retry loop stops
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Maximum number of attempts (each attempt runs every method once)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Outgoing request budget for the recognition service
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for IdentificationSection {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            requests_per_second: default_requests_per_second(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_confidence_threshold() -> f64 {
    95.0
}

fn default_max_attempts() -> u32 {
    5
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_requests_per_second() -> u32 {
    5
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load configuration with graceful degradation
///
/// An explicit path must exist and parse. Without one, the platform config
/// file is used when present, otherwise built-in defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return load_toml_config(path);
    }

    match find_config_file() {
        Some(path) => load_toml_config(&path),
        None => {
            warn!("No config file found, using built-in defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Locate the platform config file, if any
pub fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("plantid").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/plantid/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}
